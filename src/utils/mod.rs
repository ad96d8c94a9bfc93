pub mod mapping;
pub mod naming;
pub mod perf;
pub mod selector;

pub use mapping::{gen_feat_val_list, reverse_map};
pub use naming::NameRegistry;
pub use perf::{gen_perf_dicts, PerformanceRecord};
pub use selector::{gen_global_selector, gen_local_selector, GlobalSelectorRow, LocalSelectorRow};
