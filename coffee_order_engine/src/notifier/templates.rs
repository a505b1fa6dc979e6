use std::fmt::Display;

use crate::db_types::Order;

/// The kinds of email sent for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Sent to the shop's contact address for every order.
    OperatorNotice,
    /// Sent to the customer, if they gave an email address.
    CustomerConfirmation,
}

impl Notice {
    pub fn subject(&self) -> &'static str {
        match self {
            Self::OperatorNotice => "New Coffee Order",
            Self::CustomerConfirmation => "Your Coffee Order Confirmation",
        }
    }

    pub fn body(&self, order: &Order, item_name: &str) -> String {
        match self {
            Self::OperatorNotice => {
                let mut body = format!("Name: {}\nCoffee: {item_name}\nNotes: {}", order.name, order.notes);
                if let Some(email) = order.customer_email() {
                    body.push_str(&format!("\nCustomer Email: {email}"));
                }
                body
            },
            Self::CustomerConfirmation => format!(
                "Hi {},\n\nThank you for your order!\n\nOrder Details:\nCoffee: {item_name}\nNotes: {}\n\nWe will \
                 process your order soon.\n\nBest regards,\nCoffee Shop",
                order.name, order.notes
            ),
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OperatorNotice => write!(f, "operator notice"),
            Self::CustomerConfirmation => write!(f, "customer confirmation"),
        }
    }
}
