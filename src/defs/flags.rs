use bitflags::bitflags;

bitflags! {
    /// Behaviour flags carried by every sprite at runtime.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct SpriteFlags: u8 {
        /// Blocks enemy movement while its owner is alive.
        const SOLID  = 0x01;
        /// Collected when the player steps onto its cell.
        const PICKUP = 0x02;
        /// Collecting every goal pickup finishes the level.
        const GOAL   = 0x04;
    }
}
