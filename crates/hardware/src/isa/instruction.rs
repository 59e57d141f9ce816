//! Opcode table and decoded instructions.
//!
//! [`Opcode`] is the single source of truth for the instruction table: byte
//! value, mnemonic, and operand count all come from it. [`Instruction`] is an
//! opcode together with the operand bytes it consumes.

use std::fmt;

use super::opcodes as op;

/// Every opcode the CPU implements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Halt.
    Hlt = op::HLT,
    /// Load immediate.
    Ldi = op::LDI,
    /// Print register.
    Prn = op::PRN,
    /// Multiply registers.
    Mul = op::MUL,
    /// Add registers.
    Add = op::ADD,
    /// Compare registers.
    Cmp = op::CMP,
    /// Unconditional jump.
    Jmp = op::JMP,
    /// Jump if equal.
    Jeq = op::JEQ,
    /// Jump if not equal.
    Jne = op::JNE,
    /// Push register.
    Push = op::PUSH,
    /// Pop into register.
    Pop = op::POP,
}

impl Opcode {
    /// All opcodes, in table order.
    pub const ALL: [Self; 11] = [
        Self::Hlt,
        Self::Ldi,
        Self::Prn,
        Self::Mul,
        Self::Add,
        Self::Cmp,
        Self::Jmp,
        Self::Jeq,
        Self::Jne,
        Self::Push,
        Self::Pop,
    ];

    /// The encoded opcode byte.
    #[inline]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Upper-case assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Hlt => "HLT",
            Self::Ldi => "LDI",
            Self::Prn => "PRN",
            Self::Mul => "MUL",
            Self::Add => "ADD",
            Self::Cmp => "CMP",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
            Self::Push => "PUSH",
            Self::Pop => "POP",
        }
    }

    /// Number of operand bytes following the opcode.
    pub const fn operand_count(self) -> u8 {
        match self {
            Self::Hlt => 0,
            Self::Prn | Self::Jmp | Self::Jeq | Self::Jne | Self::Push | Self::Pop => 1,
            Self::Ldi | Self::Mul | Self::Add | Self::Cmp => 2,
        }
    }

    /// Total encoded size in bytes.
    #[inline]
    pub const fn size(self) -> u8 {
        1 + self.operand_count()
    }

    /// True for operations routed through the ALU.
    pub const fn is_alu(self) -> bool {
        self.byte() & op::ALU_BIT != 0
    }

    /// True for instructions that may replace the PC instead of advancing it.
    pub const fn sets_pc(self) -> bool {
        self.byte() & op::SETS_PC_BIT != 0
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.byte() == byte)
            .ok_or(byte)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A decoded instruction with its raw operand bytes.
///
/// Register operands are kept as the bytes found in memory; they are
/// validated against the register file when the instruction executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `HLT`
    Hlt,
    /// `LDI reg, imm`
    Ldi {
        /// Destination register.
        reg: u8,
        /// Value to load.
        imm: u8,
    },
    /// `PRN reg`
    Prn {
        /// Register to print.
        reg: u8,
    },
    /// `MUL reg_a, reg_b`
    Mul {
        /// Destination and first factor.
        reg_a: u8,
        /// Second factor.
        reg_b: u8,
    },
    /// `ADD reg_a, reg_b`
    Add {
        /// Destination and first addend.
        reg_a: u8,
        /// Second addend.
        reg_b: u8,
    },
    /// `CMP reg_a, reg_b`
    Cmp {
        /// Left-hand side.
        reg_a: u8,
        /// Right-hand side.
        reg_b: u8,
    },
    /// `JMP reg`
    Jmp {
        /// Register holding the target address.
        reg: u8,
    },
    /// `JEQ reg`
    Jeq {
        /// Register holding the target address.
        reg: u8,
    },
    /// `JNE reg`
    Jne {
        /// Register holding the target address.
        reg: u8,
    },
    /// `PUSH reg`
    Push {
        /// Register to push.
        reg: u8,
    },
    /// `POP reg`
    Pop {
        /// Register receiving the popped value.
        reg: u8,
    },
}

impl Instruction {
    /// Builds an instruction from its opcode and the two bytes after it.
    ///
    /// Operand bytes beyond the opcode's arity are ignored.
    pub const fn from_parts(opcode: Opcode, a: u8, b: u8) -> Self {
        match opcode {
            Opcode::Hlt => Self::Hlt,
            Opcode::Ldi => Self::Ldi { reg: a, imm: b },
            Opcode::Prn => Self::Prn { reg: a },
            Opcode::Mul => Self::Mul { reg_a: a, reg_b: b },
            Opcode::Add => Self::Add { reg_a: a, reg_b: b },
            Opcode::Cmp => Self::Cmp { reg_a: a, reg_b: b },
            Opcode::Jmp => Self::Jmp { reg: a },
            Opcode::Jeq => Self::Jeq { reg: a },
            Opcode::Jne => Self::Jne { reg: a },
            Opcode::Push => Self::Push { reg: a },
            Opcode::Pop => Self::Pop { reg: a },
        }
    }

    /// The opcode of this instruction.
    pub const fn opcode(&self) -> Opcode {
        match self {
            Self::Hlt => Opcode::Hlt,
            Self::Ldi { .. } => Opcode::Ldi,
            Self::Prn { .. } => Opcode::Prn,
            Self::Mul { .. } => Opcode::Mul,
            Self::Add { .. } => Opcode::Add,
            Self::Cmp { .. } => Opcode::Cmp,
            Self::Jmp { .. } => Opcode::Jmp,
            Self::Jeq { .. } => Opcode::Jeq,
            Self::Jne { .. } => Opcode::Jne,
            Self::Push { .. } => Opcode::Push,
            Self::Pop { .. } => Opcode::Pop,
        }
    }

    /// Encoded size in bytes; the PC advance when the instruction does not jump.
    #[inline]
    pub const fn size(&self) -> u8 {
        self.opcode().size()
    }

    /// Encodes the instruction back into its memory bytes.
    pub fn encode(&self) -> Vec<u8> {
        let opcode = self.opcode().byte();
        match *self {
            Self::Hlt => vec![opcode],
            Self::Ldi { reg, imm } => vec![opcode, reg, imm],
            Self::Mul { reg_a, reg_b } | Self::Add { reg_a, reg_b } | Self::Cmp { reg_a, reg_b } => {
                vec![opcode, reg_a, reg_b]
            }
            Self::Prn { reg }
            | Self::Jmp { reg }
            | Self::Jeq { reg }
            | Self::Jne { reg }
            | Self::Push { reg }
            | Self::Pop { reg } => vec![opcode, reg],
        }
    }
}
