use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "klik-menu", version, about = "KlikCafe menu browser")]
pub struct CliArgs {
    /// Print the default menu path and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the menu hierarchy as JSON (with --headless)
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Menu source: a JSON file path or an http(s) URL
    #[arg(long, value_name = "PATH|URL")]
    pub source: Option<String>,

    /// Override the log file used while the terminal UI is running
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(source) = &self.source {
            std::env::set_var("MENU_SOURCE", source);
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("MENU_LOG_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_source_and_mode_flags() {
        let args = CliArgs::parse_from([
            "klik-menu",
            "--headless",
            "--json",
            "--source",
            "https://example.com/menu",
        ]);

        assert!(args.headless);
        assert!(args.json);
        assert!(!args.debug);
        assert_eq!(args.source.as_deref(), Some("https://example.com/menu"));
        assert_eq!(args.log_file, None);
    }
}
