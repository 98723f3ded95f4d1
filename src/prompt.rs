//! The `user@host:cwd$ ` prompt.

use crate::env::Environment;

/// Shown in place of a user or host name that can't be determined.
const UNKNOWN: &str = "?";

/// Renders the prompt from the current state of `env`.
pub fn render(env: &Environment) -> String {
    let user = env.user_name();
    let host = env.hostname();
    compose(
        user.as_deref().unwrap_or(UNKNOWN),
        host.as_deref().unwrap_or(UNKNOWN),
        &env.display_dir(),
    )
}

fn compose(user: &str, host: &str, dir: &str) -> String {
    format!("{user}@{host}:{dir}$ ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn test_format_layout() {
        assert_eq!(compose("guido", "box", "/tmp"), "guido@box:/tmp$ ");
    }

    #[test]
    fn test_render_tracks_pwd() {
        let mut env = Environment {
            vars: HashMap::from([("USER".to_owned(), "guido".to_owned())]),
            current_dir: PathBuf::from("/start"),
        };
        assert!(render(&env).starts_with("guido@"));
        assert!(render(&env).ends_with(":/start$ "));

        env.set_var("PWD", "/tmp");
        assert!(render(&env).ends_with(":/tmp$ "));
    }
}
