use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumCount, EnumIter};

/// Instruction kinds. The chunk stores raw bytes; this is how a consumer reads them.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive, Display, EnumCount, EnumIter,
)]
#[repr(u8)]
pub enum OpCode {
    /// Load constant for use. Followed by one byte: the constant pool index
    #[strum(serialize = "OP_CONSTANT")]
    Constant,
    #[strum(serialize = "OP_RETURN")]
    Return,
}

impl OpCode {
    /// Number of operand bytes that follow this opcode in the byte stream
    pub fn operand_count(self) -> usize {
        match self {
            OpCode::Constant => 1,
            OpCode::Return => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn byte_values() {
        assert_eq!(u8::from(OpCode::Constant), 0);
        assert_eq!(u8::from(OpCode::Return), 1);
    }

    #[test]
    fn every_opcode_survives_a_byte() {
        assert_eq!(OpCode::iter().count(), OpCode::COUNT);
        for op in OpCode::iter() {
            let byte: u8 = op.into();
            assert_eq!(OpCode::try_from(byte).ok(), Some(op));
        }
    }

    #[test]
    fn unknown_byte() {
        assert!(OpCode::try_from(OpCode::COUNT as u8).is_err());
        assert!(OpCode::try_from(u8::MAX).is_err());
    }

    #[test]
    fn operands() {
        assert_eq!(OpCode::Constant.operand_count(), 1);
        assert_eq!(OpCode::Return.operand_count(), 0);
    }

    #[test]
    fn names() {
        assert_eq!(OpCode::Constant.to_string(), "OP_CONSTANT");
        assert_eq!(OpCode::Return.to_string(), "OP_RETURN");
    }
}
