//! Preference inspection commands.

use std::io::{self, Write};

use clap::{Args, Subcommand};
use diprobe_prefs::{Preference, QuerySet};
use tracing::debug;

use crate::config::{load_config, DEFAULT_CONFIG_FILE};
use crate::Cli;

/// Inspect configured preferences.
#[derive(Args)]
pub struct PreferencesCommand {
    #[command(subcommand)]
    command: PreferencesSubcommand,
}

#[derive(Subcommand)]
enum PreferencesSubcommand {
    /// Display configured preferences for the given interface(s)
    Info {
        /// Interface or class names to list the preference for (suffix match)
        #[arg(value_name = "INTERFACE")]
        interfaces: Vec<String>,
    },
    /// List all configured preferences
    List,
}

impl PreferencesCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let path = cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_FILE);
        let config = load_config(path)?;
        let prefs = &config.preferences;
        debug!(path, count = prefs.len(), "loaded preference map");

        let mut stdout = io::stdout().lock();
        match &self.command {
            PreferencesSubcommand::Info { interfaces } => {
                let queries = QuerySet::parse(interfaces);
                debug!(queries = queries.len(), "matching query fragments");
                write_preferences(&mut stdout, prefs.find(&queries))?;
            }
            PreferencesSubcommand::List => {
                write_preferences(&mut stdout, prefs.iter())?;
            }
        }
        Ok(())
    }
}

/// Writes preference pairs to the sink, one `type => target` line each.
fn write_preferences<'a, W, I>(out: &mut W, preferences: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = Preference<'a>>,
{
    for pref in preferences {
        writeln!(out, "{} => {}", pref.type_name, pref.target_class)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use diprobe_prefs::PreferenceMap;

    fn render(prefs: &PreferenceMap, queries: &[&str]) -> String {
        let mut buf = Vec::new();
        let queries = QuerySet::parse(queries);
        write_preferences(&mut buf, prefs.find(&queries)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_matched_pair_rendering() {
        let prefs = PreferenceMap::from_iter([
            ("First\\Configured\\Preference", "Test\\Target\\ClassA"),
            ("Second\\Configured\\Preference", "Test\\Target\\ClassB"),
        ]);
        assert_eq!(
            render(&prefs, &["Configured\\Preference"]),
            "First\\Configured\\Preference => Test\\Target\\ClassA\n\
             Second\\Configured\\Preference => Test\\Target\\ClassB\n"
        );
    }

    #[test]
    fn test_no_match_renders_nothing() {
        let prefs =
            PreferenceMap::from_iter([("Test\\Configured\\Preference", "Test\\Target\\Class")]);
        assert_eq!(render(&prefs, &["Non\\Existing\\Preference"]), "");
        assert_eq!(render(&prefs, &[]), "");
    }

    #[test]
    fn test_overlapping_queries_render_single_line() {
        let prefs = PreferenceMap::from_iter([("Configured\\Preference", "Test\\Target\\Class")]);
        assert_eq!(
            render(&prefs, &["Configured\\Preference", "Preference"]),
            "Configured\\Preference => Test\\Target\\Class\n"
        );
    }
}
