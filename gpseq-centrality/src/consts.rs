pub const PROGRESS_TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}";
pub const ESTIMATE_MESSAGE: &str = "Estimating bin centrality";
pub const RANK_MESSAGE: &str = "Ranking bins";
