use crate::domain::theme::Theme;

use super::perf_stats::PerfStats;
use super::EngineCore;

pub(super) fn enable_perf_metrics(core: &mut EngineCore, enabled: bool) {
    core.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(core: &EngineCore) -> PerfStats {
    core.perf_stats.clone()
}

pub(super) fn load_theme_json(core: &mut EngineCore, json: &str) -> Result<(), String> {
    core.theme = Theme::from_json(json)?;
    Ok(())
}

pub(super) fn theme_manifest_json(core: &EngineCore) -> String {
    core.theme.manifest_json()
}
