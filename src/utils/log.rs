use log::LevelFilter;

pub struct Logger;

impl Logger {
    pub fn init(level: LevelFilter) {
        let mut builder = colog::default_builder();
        builder.filter_level(level);
        // tectonic and reqwest are chatty at debug level
        builder.filter_module("tectonic", LevelFilter::Warn.min(level));
        builder.filter_module("reqwest", LevelFilter::Info.min(level));
        builder.init();
    }
}
