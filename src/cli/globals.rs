use std::path::PathBuf;

/// Settings shared by every console subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalArgs {
    pub api_base_url: String,
    pub token_file: PathBuf,
    pub page_size: u32,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_base_url: String, token_file: PathBuf, page_size: u32) -> Self {
        Self {
            api_base_url,
            token_file,
            page_size,
        }
    }
}

/// `$HOME/.userdesk/token`, or a relative `.userdesk/token` without a home.
#[must_use]
pub fn default_token_file() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".userdesk")
        .join("token")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_token_file_under_home() {
        temp_env::with_var("HOME", Some("/home/ada"), || {
            assert_eq!(
                default_token_file(),
                PathBuf::from("/home/ada/.userdesk/token")
            );
        });
    }

    #[test]
    fn test_default_token_file_without_home() {
        temp_env::with_var("HOME", None::<&str>, || {
            assert_eq!(default_token_file(), PathBuf::from(".userdesk/token"));
        });
    }
}
