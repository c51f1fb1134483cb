/// Session setup values, provided by CLI flags, a TOML file or plain defaults.
pub trait SessionConfig {
    fn daily_cap(&self) -> usize;
    fn vial_count(&self) -> usize;
    fn doses_per_vial(&self) -> u32;
}
