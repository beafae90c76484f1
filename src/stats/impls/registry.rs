use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::store::structs::registry::Registry;

impl Registry {
    pub fn get_stats(&self) -> Stats {
        self.stats.snapshot()
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) {
        self.stats.update(event, value);
    }
}
