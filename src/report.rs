//! Console text for the setup and smoke-test tools.

use crate::service::env_bootstrapper::WriteOutcome;
use crate::service::smoke_test::{SmokeEvent, SmokeFailure, Stage};
use std::fmt;

pub const SETUP_BANNER: &str = "Setting up environment variables for Trip Planner...";
pub const SMOKE_BANNER: &str = "Testing Payment System...";

const NEXT_STEPS: &[&str] = &[
    "1. Get your Razorpay test credentials from: https://dashboard.razorpay.com/",
    "2. Update the RAZORPAY_KEY_ID and RAZORPAY_KEY_SECRET in both .env files",
    "3. Restart your backend and frontend servers",
    "4. The payment system will now work in mock mode until you add real credentials",
];

const CREDENTIAL_STEPS: &[&str] = &[
    "1. Go to https://dashboard.razorpay.com/",
    "2. Sign up/Login to your account",
    "3. Go to Settings > API Keys",
    "4. Generate Test API Keys",
    "5. Copy the Key ID and Key Secret to your .env files",
];

const STATUS_NOTES: &[&str] = &[
    "- Payment system is configured to work in mock mode",
    "- No real payments will be processed until you add real Razorpay credentials",
    "- The 400 Bad Request error should now be resolved",
];

pub fn render_write_outcome(outcome: &WriteOutcome) -> String {
    match outcome {
        WriteOutcome::Written { label, path } => {
            format!("[ok] {label} .env file created at: {}", path.display())
        }
        WriteOutcome::Failed {
            label,
            reason,
            content,
            ..
        } => format!(
            "[warn] Could not create {} .env file: {reason}\n\
             Please create it manually with the following content:\n\n{content}",
            label.to_lowercase()
        ),
    }
}

pub fn render_next_steps() -> String {
    format!(
        "Next Steps:\n{}\n\nTo get Razorpay credentials:\n{}\n\nCurrent Status:\n{}\n",
        NEXT_STEPS.join("\n"),
        CREDENTIAL_STEPS.join("\n"),
        STATUS_NOTES.join("\n")
    )
}

impl fmt::Display for SmokeEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmokeEvent::Started(Stage::OrderCreation) => f.write_str("1. Testing order creation..."),
            SmokeEvent::Started(Stage::PaymentVerification) => {
                f.write_str("2. Testing payment verification...")
            }
            SmokeEvent::OrderAccepted(accepted) => write!(
                f,
                "[ok] Order created successfully!\nOrder ID: {}\nAmount: {}\nCurrency: {}\nMessage: {}\n",
                accepted.order.order_id,
                accepted.order.amount,
                accepted.order.currency,
                accepted.message.as_deref().unwrap_or("-")
            ),
            SmokeEvent::Verified(accepted) => write!(
                f,
                "[ok] Payment verified successfully!\nStatus: {}\nMessage: {}\n",
                accepted.verification.status,
                accepted.message.as_deref().unwrap_or("-")
            ),
            SmokeEvent::Failed(failure) => match failure {
                SmokeFailure::Transport { error, .. } => write!(f, "[fail] Test failed: {error}"),
                SmokeFailure::Rejected { reply, .. } => {
                    let what = match failure.stage() {
                        Stage::OrderCreation => "Order creation failed",
                        Stage::PaymentVerification => "Payment verification failed",
                    };
                    write!(f, "[fail] {what} (HTTP {}): {}", reply.status, reply.body)
                }
            },
            SmokeEvent::Passed => f.write_str("All tests passed! Payment system is working correctly."),
        }
    }
}
