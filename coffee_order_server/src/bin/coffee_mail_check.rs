//! Sends a single test email to `CONTACT_EMAIL`, using the same configuration as the server.
use coffee_order_engine::{MailMessage, Mailer, SmtpMailer};
use coffee_order_server::config::ServerConfig;
use dotenvy::dotenv;
use log::info;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let config = ServerConfig::from_env_or_default();
    let mailer = match SmtpMailer::new(&config.smtp) {
        Ok(mailer) => mailer,
        Err(e) => {
            eprintln!("Could not configure the mail relay: {e}");
            std::process::exit(1);
        },
    };
    let Some(sender) = config.smtp.sender() else {
        eprintln!("No sender address. Set SMTP_FROM or SMTP_USER.");
        std::process::exit(1);
    };
    let message = MailMessage::new(
        sender,
        config.contact_email.as_str(),
        "Test Email from the Coffee Order Server",
        "This is a test email sent by coffee_mail_check.",
    );
    info!("📧️ Sending test email via {}:{}", config.smtp.host, config.smtp.port);
    match mailer.send(&message).await {
        Ok(()) => println!("Test email sent successfully!"),
        Err(e) => {
            eprintln!("Failed to send email: {e}");
            std::process::exit(1);
        },
    }
}
