use coffee_order_engine::{DeliveryError, MailMessage, Mailer};
use mockall::mock;

mock! {
    pub RelayMailer {}
    impl Mailer for RelayMailer {
        async fn send(&self, message: &MailMessage) -> Result<(), DeliveryError>;
    }
}
