use bitflags::bitflags;

bitflags! {
    /// Tracks which hardware fields a sizing pass changed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct HardwareFields: u8 {
        const TONS          = 1 << 0;
        const COST          = 1 << 1;
        const POWER_PER_TON = 1 << 2;
    }
}
