use vcpu8_core::isa::opcodes::*;

/// Fluent assembler producing program bytes, one helper per instruction.
#[derive(Debug, Default, Clone)]
pub struct ProgramBuilder {
    bytes: Vec<u8>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Address the next emitted byte will occupy.
    pub fn here(&self) -> u8 {
        self.bytes.len() as u8
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// Pads with zero bytes up to `addr`.
    pub fn org(mut self, addr: u8) -> Self {
        assert!(self.bytes.len() <= addr as usize, "org moves backwards");
        self.bytes.resize(addr as usize, 0);
        self
    }

    // --- Helpers for each instruction ---

    pub fn hlt(self) -> Self {
        self.raw(&[HLT])
    }

    pub fn ldi(self, r: u8, v: u8) -> Self {
        self.raw(&[LDI, r, v])
    }

    pub fn prn(self, r: u8) -> Self {
        self.raw(&[PRN, r])
    }

    pub fn mul(self, a: u8, b: u8) -> Self {
        self.raw(&[MUL, a, b])
    }

    pub fn add(self, a: u8, b: u8) -> Self {
        self.raw(&[ADD, a, b])
    }

    pub fn push(self, r: u8) -> Self {
        self.raw(&[PUSH, r])
    }

    pub fn pop(self, r: u8) -> Self {
        self.raw(&[POP, r])
    }

    pub fn call(self, r: u8) -> Self {
        self.raw(&[CALL, r])
    }

    pub fn ret(self) -> Self {
        self.raw(&[RET])
    }

    pub fn cmp(self, a: u8, b: u8) -> Self {
        self.raw(&[CMP, a, b])
    }

    pub fn jmp(self, r: u8) -> Self {
        self.raw(&[JMP, r])
    }

    pub fn jeq(self, r: u8) -> Self {
        self.raw(&[JEQ, r])
    }

    pub fn jne(self, r: u8) -> Self {
        self.raw(&[JNE, r])
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }

    /// Renders the program in the text format the loader accepts.
    pub fn to_source(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:08b}\n")).collect()
    }
}
