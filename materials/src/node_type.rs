//! Material Node Type

use bitflags::bitflags;

bitflags! {
    /// Categories of material graph nodes used when checking connections.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeType: u8 {
        const BXDF = 0b00000001;
        const CONSTANT = 0b00000010;
        const TEXTURE = 0b00000100;
        const OPERATOR = 0b00001000;
    }
}
