use std::collections::HashMap;
use std::env as stdenv;
use std::path::{Path, PathBuf};

/// The shell's view of the process environment.
///
/// `vars` is seeded from the process environment at startup and applied on
/// top of it for every external command, so updates made here (e.g. `PWD`
/// after `cd`) are what children see.
#[derive(Debug, Clone)]
pub struct Environment {
    pub vars: HashMap<String, String>,
    /// Working directory as of the last successful `cd`.
    pub current_dir: PathBuf,
}

impl Environment {
    /// Capture the current process environment and working directory.
    pub fn new() -> Self {
        // Variables that aren't valid UTF-8 are left out of the map; children
        // still inherit them from the process.
        let vars: HashMap<String, String> = stdenv::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        let current_dir = stdenv::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self { vars, current_dir }
    }

    /// Looks up `key` in `vars`, without falling back to the process
    /// environment: a variable removed from the shell stays removed.
    pub fn get_var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn set_var(&mut self, key: impl Into<String>, val: impl Into<String>) {
        self.vars.insert(key.into(), val.into());
    }

    /// Record a completed directory change in `PWD` and `OLDPWD`.
    pub fn record_dir_change(&mut self, new_dir: &Path) {
        let old = std::mem::replace(&mut self.current_dir, new_dir.to_path_buf());
        self.set_var("OLDPWD", old.to_string_lossy());
        self.set_var("PWD", new_dir.to_string_lossy());
    }

    /// Name of the invoking user: `USER`, then the passwd entry of the real uid.
    pub fn user_name(&self) -> Option<String> {
        if let Some(user) = self.get_var("USER").filter(|u| !u.is_empty()) {
            return Some(user.to_owned());
        }
        passwd_user_name()
    }

    /// Local host name: `gethostname`, then `HOSTNAME`.
    pub fn hostname(&self) -> Option<String> {
        system_hostname().or_else(|| {
            self.get_var("HOSTNAME")
                .filter(|h| !h.is_empty())
                .map(str::to_owned)
        })
    }

    /// Directory shown in the prompt: `PWD`, then the tracked current directory.
    pub fn display_dir(&self) -> String {
        match self.get_var("PWD").filter(|d| !d.is_empty()) {
            Some(dir) => dir.to_owned(),
            None => self.current_dir.to_string_lossy().into_owned(),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn system_hostname() -> Option<String> {
    nix::unistd::gethostname()
        .ok()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
}

#[cfg(not(unix))]
fn system_hostname() -> Option<String> {
    None
}

#[cfg(unix)]
fn passwd_user_name() -> Option<String> {
    use nix::unistd::{User, getuid};
    User::from_uid(getuid()).ok().flatten().map(|user| user.name)
}

#[cfg(not(unix))]
fn passwd_user_name() -> Option<String> {
    None
}
