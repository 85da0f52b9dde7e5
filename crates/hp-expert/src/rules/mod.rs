//! Independent rule groups.
//!
//! Each group is a pure function of the context. The engine concatenates the
//! groups in the order of [`RULE_GROUPS`] and sorts once by priority.

use crate::context::ExpertContext;
use crate::model::Recommendation;

pub mod cavitation;
pub mod efficiency;
pub mod electrical;
pub mod head_loss;
pub mod hydraulic;
pub mod installation;
pub mod maintenance;
pub mod materials;
pub mod velocity;

pub type RuleGroup = fn(&ExpertContext<'_>) -> Vec<Recommendation>;

pub const RULE_GROUPS: [(&str, RuleGroup); 9] = [
    ("cavitation", cavitation::evaluate),
    ("materials", materials::evaluate),
    ("velocity", velocity::evaluate),
    ("head_loss", head_loss::evaluate),
    ("efficiency", efficiency::evaluate),
    ("electrical", electrical::evaluate),
    ("installation", installation::evaluate),
    ("hydraulic", hydraulic::evaluate),
    ("maintenance", maintenance::evaluate),
];
