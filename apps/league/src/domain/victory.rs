use std::fmt;

use serde::{Deserialize, Serialize};

/// How a round was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VictoryType {
    Simple,
    Carroca,
    LaELo,
    Cruzada,
    Contagem,
    /// Drawn round: nobody scores, the next decided round carries a bonus.
    Empate,
}

impl VictoryType {
    pub const ALL: [VictoryType; 6] = [
        VictoryType::Simple,
        VictoryType::Carroca,
        VictoryType::LaELo,
        VictoryType::Cruzada,
        VictoryType::Contagem,
        VictoryType::Empate,
    ];

    /// Points credited to the winning team, before any carried bonus.
    pub const fn points(self) -> u16 {
        match self {
            VictoryType::Simple => 1,
            VictoryType::Carroca => 2,
            VictoryType::LaELo => 3,
            VictoryType::Cruzada => 4,
            VictoryType::Contagem => 1,
            VictoryType::Empate => 0,
        }
    }

    pub const fn is_draw(self) -> bool {
        matches!(self, VictoryType::Empate)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            VictoryType::Simple => "simple",
            VictoryType::Carroca => "carroca",
            VictoryType::LaELo => "la_e_lo",
            VictoryType::Cruzada => "cruzada",
            VictoryType::Contagem => "contagem",
            VictoryType::Empate => "empate",
        }
    }
}

impl fmt::Display for VictoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Special classification of a finished game's win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialWin {
    /// The losing team never scored.
    Buchuda,
    /// The winning team came back from a 0-5 deficit.
    BuchudaDeRe,
}
