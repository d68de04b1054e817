use solana_sdk::pubkey;
use solana_sdk::pubkey::Pubkey;
use std::fmt::{Display, Formatter};

pub const PAMM_PROGRAM_ID: Pubkey = pubkey!("pAMMBay6oceH9fJKBRHGP5D4bD4sWpmSwMn52FMfXEA");
pub const FEE_PROGRAM_ID: Pubkey = pubkey!("pfeeUxB6jkeY1Hxd7CsFCAjcbHA9rWtchMGdZ6VojVZ");
pub const PROXY_PROGRAM_ID: Pubkey = pubkey!("7vbo8W8myMRKZRogqsF5u4RwZtUhN7BaFJR41StrhPkU");
pub const ATA_PROGRAM_ID: Pubkey = pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");
pub const SYSTEM_PROGRAM_ID: Pubkey = pubkey!("11111111111111111111111111111111");
pub const MINT_PROGRAM_ID: Pubkey = spl_token::ID;
pub const MINT_2022_PROGRAM_ID: Pubkey = spl_token_2022::ID;

/// 参与推导和组装指令的各个程序id，可通过配置覆盖
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramIds {
    pub pamm: Pubkey,
    pub fee: Pubkey,
    pub ata: Pubkey,
    pub proxy: Pubkey,
}

impl Default for ProgramIds {
    fn default() -> Self {
        Self {
            pamm: PAMM_PROGRAM_ID,
            fee: FEE_PROGRAM_ID,
            ata: ATA_PROGRAM_ID,
            proxy: PROXY_PROGRAM_ID,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenProgram {
    Token,
    Token2022,
}

impl Display for TokenProgram {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TokenProgram::Token => "Token",
            TokenProgram::Token2022 => "Token2022",
        })
    }
}

impl TokenProgram {
    pub fn get_ref_program_id(&self) -> &Pubkey {
        match self {
            TokenProgram::Token => &MINT_PROGRAM_ID,
            TokenProgram::Token2022 => &MINT_2022_PROGRAM_ID,
        }
    }
}

#[inline]
pub fn get_token_program_with_owner(owner: &Pubkey) -> Option<TokenProgram> {
    if owner == &MINT_PROGRAM_ID {
        Some(TokenProgram::Token)
    } else if owner == &MINT_2022_PROGRAM_ID {
        Some(TokenProgram::Token2022)
    } else {
        None
    }
}
