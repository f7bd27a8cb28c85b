use crate::commands::{CmdMessage, CmdResult, StockPaths};
use crate::config::StockConfig;
use crate::error::Result;
use crate::model::Scope;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &StockPaths, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope);
    match action {
        ConfigAction::ShowAll => {
            let config = StockConfig::load(&dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = StockConfig::load(&dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = StockConfig::load(&dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e.to_string()));
                return Ok(res);
            }
            config.save(&dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> StockPaths {
        StockPaths::new(dir.path().to_path_buf(), dir.path().join("global"))
    }

    #[test]
    fn set_persists_and_show_reads_back() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);

        let set = run(
            &paths,
            Scope::Project,
            ConfigAction::Set("currency".into(), "€".into()),
        )
        .unwrap();
        assert!(!set.has_errors());

        let shown = run(&paths, Scope::Project, ConfigAction::ShowKey("currency".into())).unwrap();
        assert_eq!(shown.messages[0].content, "€");
    }

    #[test]
    fn scopes_are_independent() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);

        run(
            &paths,
            Scope::Global,
            ConfigAction::Set("threshold".into(), "3".into()),
        )
        .unwrap();

        let project = run(&paths, Scope::Project, ConfigAction::ShowAll).unwrap();
        assert_eq!(project.config.unwrap().low_stock_threshold, 10);
        let global = run(&paths, Scope::Global, ConfigAction::ShowAll).unwrap();
        assert_eq!(global.config.unwrap().low_stock_threshold, 3);
    }

    #[test]
    fn invalid_value_is_reported_not_saved() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);

        let result = run(
            &paths,
            Scope::Project,
            ConfigAction::Set("threshold".into(), "zero".into()),
        )
        .unwrap();
        assert!(result.has_errors());
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn unknown_key() {
        let dir = TempDir::new().unwrap();
        let result = run(&paths(&dir), Scope::Project, ConfigAction::ShowKey("nope".into())).unwrap();
        assert!(result.has_errors());
    }
}
