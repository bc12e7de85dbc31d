//! Line-oriented `KEY=VALUE` configuration files and the default templates
//! written for the trip planner backend and frontend.

pub const RAZORPAY_TEST_KEY_ID: &str = "rzp_test_R65rS3t4vqO7i1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvLine {
    Comment(String),
    Blank,
    Entry { key: String, value: String },
}

/// An ordered configuration record. Comments and blank lines are kept in
/// place so the rendered file matches its template byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    lines: Vec<EnvLine>,
}

impl EnvFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comment(mut self, text: &str) -> Self {
        self.lines.push(EnvLine::Comment(text.to_string()));
        self
    }

    pub fn blank(mut self) -> Self {
        self.lines.push(EnvLine::Blank);
        self
    }

    pub fn entry(mut self, key: &str, value: &str) -> Self {
        self.lines.push(EnvLine::Entry {
            key: key.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Every line, including the last, is terminated by `\n`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                EnvLine::Comment(text) => {
                    out.push_str("# ");
                    out.push_str(text);
                }
                EnvLine::Blank => {}
                EnvLine::Entry { key, value } => {
                    out.push_str(key);
                    out.push('=');
                    out.push_str(value);
                }
            }
            out.push('\n');
        }
        out
    }
}

pub fn backend_defaults() -> EnvFile {
    EnvFile::new()
        .comment("Server Configuration")
        .entry("NODE_ENV", "development")
        .entry("PORT", "3000")
        .blank()
        .comment("Database Configuration")
        .entry("MONGODB_URI", "mongodb://localhost:27017/trip_planner")
        .blank()
        .comment("JWT Configuration")
        .entry("JWT_SECRET", "your_jwt_secret_key_here_2024")
        .entry("JWT_EXPIRE", "7d")
        .blank()
        .comment("Razorpay Configuration (Test Keys)")
        .comment("Replace these with your actual Razorpay test credentials")
        .entry("RAZORPAY_KEY_ID", RAZORPAY_TEST_KEY_ID)
        .entry("RAZORPAY_KEY_SECRET", "test_secret_key_for_development")
        .entry("RAZORPAY_WEBHOOK_SECRET", "test_webhook_secret")
        .blank()
        .comment("CORS Configuration")
        .entry("FRONTEND_URL", "http://localhost:5173")
}

pub fn frontend_defaults() -> EnvFile {
    EnvFile::new()
        .comment("Frontend Environment Variables")
        .entry("VITE_API_URL", "http://localhost:3000/api")
        .entry("VITE_RAZORPAY_KEY_ID", RAZORPAY_TEST_KEY_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontend_renders_exact_template() {
        let expected = "# Frontend Environment Variables\n\
                        VITE_API_URL=http://localhost:3000/api\n\
                        VITE_RAZORPAY_KEY_ID=rzp_test_R65rS3t4vqO7i1\n";
        assert_eq!(frontend_defaults().render(), expected);
    }

    #[test]
    fn backend_renders_sections_in_order() {
        let text = backend_defaults().render();
        let keys: Vec<&str> = text
            .lines()
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .filter_map(|l| l.split_once('=').map(|(k, _)| k))
            .collect();
        assert_eq!(
            keys,
            vec![
                "NODE_ENV",
                "PORT",
                "MONGODB_URI",
                "JWT_SECRET",
                "JWT_EXPIRE",
                "RAZORPAY_KEY_ID",
                "RAZORPAY_KEY_SECRET",
                "RAZORPAY_WEBHOOK_SECRET",
                "FRONTEND_URL",
            ]
        );
        assert!(text.starts_with("# Server Configuration\nNODE_ENV=development\n"));
        assert!(text.ends_with("\n# CORS Configuration\nFRONTEND_URL=http://localhost:5173\n"));
    }

    #[test]
    fn both_files_share_the_razorpay_key() {
        let key_line = format!("={RAZORPAY_TEST_KEY_ID}\n");
        assert!(backend_defaults().render().contains(&format!("RAZORPAY_KEY_ID{key_line}")));
        assert!(frontend_defaults().render().contains(&format!("VITE_RAZORPAY_KEY_ID{key_line}")));
    }

    #[test]
    fn blank_lines_render_empty() {
        let file = EnvFile::new().entry("A", "1").blank().entry("B", "2");
        assert_eq!(file.render(), "A=1\n\nB=2\n");
    }
}
