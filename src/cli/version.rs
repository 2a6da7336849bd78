//! `--version` and `--help` output.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_text() -> String {
    format!("listick {}", VERSION)
}

pub fn help_text() -> String {
    format!(
        "{}
The Li-Stick smart cane showcase, in your terminal.

USAGE:
    listick [OPTIONS]

OPTIONS:
    --page <name>    Start on a page: home, about, features, impact, future, contact
    --offline        Store form submissions locally instead of in Firestore
    --config <path>  Read settings from <path> instead of ~/.listick/config.json
    --no-log         Do not write ~/.listick/logs/listick.log
    -V, --version    Print version
    -h, --help       Print this help

KEYS:
    1-6 / Tab        Switch page
    ← →              Previous / next slide
    Space            Toggle autoplay
    m                Toggle reduced motion
    q / Ctrl+C       Quit",
        version_text()
    )
}

/// Print the version and exit.
pub fn handle_version_command() -> ! {
    println!("{}", version_text());
    std::process::exit(0)
}

/// Print usage and exit.
pub fn handle_help_command() -> ! {
    println!("{}", help_text());
    std::process::exit(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        assert!(version_text().starts_with("listick "));
    }

    #[test]
    fn test_help_lists_flags() {
        let help = help_text();
        for flag in ["--page", "--offline", "--no-log", "--version", "--help"] {
            assert!(help.contains(flag), "missing {}", flag);
        }
    }
}
