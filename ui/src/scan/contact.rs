//! Contact form acknowledgment. Nothing is sent anywhere; the button label cycles
//! through a fixed sequence and reverts.

use std::future::Future;

use crate::core::timing::Timings;

pub const TRANSMITTING_LABEL: &str = "ENCRYPTING & TRANSMITTING...";
pub const SECURE_LABEL: &str = "TRANSMISSION SECURE ✅";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transmission {
    #[default]
    Idle,
    Encrypting,
    Secure,
}

impl Transmission {
    pub fn label<'a>(self, original: &'a str) -> &'a str {
        match self {
            Self::Idle => original,
            Self::Encrypting => TRANSMITTING_LABEL,
            Self::Secure => SECURE_LABEL,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Idle => "contact__submit",
            Self::Encrypting => "contact__submit contact__submit--busy",
            Self::Secure => "contact__submit contact__submit--secure",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub transmission: Transmission,
}

impl ContactForm {
    /// Idle -> Encrypting. A submit while a cycle is running is ignored.
    pub fn submit(&mut self) -> bool {
        if self.transmission != Transmission::Idle {
            return false;
        }
        self.transmission = Transmission::Encrypting;
        true
    }

    /// Move to `next`; the fields are cleared once the "message" is secure.
    pub fn advance(&mut self, next: Transmission) {
        if next == Transmission::Secure {
            self.name.clear();
            self.email.clear();
            self.message.clear();
        }
        self.transmission = next;
    }
}

/// Drive the acknowledgment after a submit: Encrypting -> Secure -> Idle.
pub async fn acknowledge<A, S, F>(timings: &Timings, mut advance: A, mut sleep: S)
where
    A: FnMut(Transmission),
    S: FnMut(u64) -> F,
    F: Future<Output = ()>,
{
    sleep(timings.transmit_ms).await;
    advance(Transmission::Secure);
    tracing::debug!("contact acknowledgment shown");
    sleep(timings.ack_hold_ms).await;
    advance(Transmission::Idle);
}
