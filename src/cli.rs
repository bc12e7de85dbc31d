use crate::config::{DEFAULT_PAYMENT_API_URL, DEFAULT_PROJECT_ROOT};
use crate::service::smoke_test::{DEFAULT_AMOUNT, DEFAULT_CURRENCY};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "setup_env", version, about = "Write default .env files for the trip planner")]
pub struct SetupEnvArgs {
    /// Project root holding `backend/` and `frontend/trip-planner/`
    #[arg(long, env = "PROJECT_ROOT", default_value = DEFAULT_PROJECT_ROOT)]
    pub root: PathBuf,
}

#[derive(Parser, Debug)]
#[command(name = "test_payment", version, about = "Smoke-test payment order creation and verification")]
pub struct TestPaymentArgs {
    /// Base URL of the payment API
    #[arg(long, env = "PAYMENT_API_URL", default_value = DEFAULT_PAYMENT_API_URL)]
    pub api_url: String,
    /// Order amount in minor currency units
    #[arg(long, default_value_t = DEFAULT_AMOUNT)]
    pub amount: i64,
    #[arg(long, default_value = DEFAULT_CURRENCY)]
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only this test touches PAYMENT_API_URL, so the env steps stay sequential.
    #[test]
    fn api_url_flag_beats_env_beats_default() {
        std::env::remove_var("PAYMENT_API_URL");
        let args = TestPaymentArgs::try_parse_from(["test_payment"]).unwrap();
        assert_eq!(args.api_url, "http://localhost:3000/api");
        assert_eq!(args.amount, 61_500);
        assert_eq!(args.currency, "INR");

        std::env::set_var("PAYMENT_API_URL", "http://env.test/api");
        let args = TestPaymentArgs::try_parse_from(["test_payment"]).unwrap();
        assert_eq!(args.api_url, "http://env.test/api");

        let args =
            TestPaymentArgs::try_parse_from(["test_payment", "--api-url", "http://flag.test/api"])
                .unwrap();
        assert_eq!(args.api_url, "http://flag.test/api");
        std::env::remove_var("PAYMENT_API_URL");
    }

    // Only this test touches PROJECT_ROOT.
    #[test]
    fn root_flag_beats_env_beats_default() {
        std::env::remove_var("PROJECT_ROOT");
        let args = SetupEnvArgs::try_parse_from(["setup_env"]).unwrap();
        assert_eq!(args.root, PathBuf::from("."));

        std::env::set_var("PROJECT_ROOT", "/srv/env-root");
        let args = SetupEnvArgs::try_parse_from(["setup_env"]).unwrap();
        assert_eq!(args.root, PathBuf::from("/srv/env-root"));

        let args = SetupEnvArgs::try_parse_from(["setup_env", "--root", "/tmp/trip"]).unwrap();
        assert_eq!(args.root, PathBuf::from("/tmp/trip"));
        std::env::remove_var("PROJECT_ROOT");
    }

    #[test]
    fn amount_and_currency_flags() {
        let args =
            TestPaymentArgs::try_parse_from(["test_payment", "--amount", "100", "--currency", "USD"])
                .unwrap();
        assert_eq!(args.amount, 100);
        assert_eq!(args.currency, "USD");
    }
}
