use crate::domain::theme::Theme;
use crate::systems::spawn::MoveThrottle;

use super::perf_stats::PerfStats;
use super::EngineCore;

pub(super) fn create_engine_core(width: u32, height: u32) -> EngineCore {
    EngineCore {
        theme: Theme::default(),
        ripples: Vec::with_capacity(64),
        throttle: MoveThrottle::new(),
        width,
        height,
        frame: 0,
        draw_list: Vec::with_capacity(64),
        draw_transfer: Vec::new(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        spawned_move: 0,
        spawned_click: 0,
    }
}
