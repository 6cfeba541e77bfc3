//! Seats, roles and the phases of the turn state machine.

use serde::Serialize;

/// The two seats at the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// What a seat is doing in the current exchange.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Attack,
    Defend,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Engine created; deck not yet dealt.
    StartGame,
    /// Waiting for the player to attack or end the move.
    PlayerAttack,
    /// Waiting for the player to beat the target or take the table.
    PlayerDefend,
    /// The computer chooses an attack or passes.
    ComputerAttack,
    /// The computer chooses a defence or takes the table.
    ComputerDefend,
    /// Terminal; ticks are no-ops.
    GameOver,
}

impl Phase {
    /// The seat that acts in this phase, if any.
    pub fn actor(self) -> Option<Side> {
        match self {
            Phase::PlayerAttack | Phase::PlayerDefend => Some(Side::Player),
            Phase::ComputerAttack | Phase::ComputerDefend => Some(Side::Computer),
            Phase::StartGame | Phase::GameOver => None,
        }
    }

    pub fn role(self) -> Option<Role> {
        match self {
            Phase::PlayerAttack | Phase::ComputerAttack => Some(Role::Attack),
            Phase::PlayerDefend | Phase::ComputerDefend => Some(Role::Defend),
            Phase::StartGame | Phase::GameOver => None,
        }
    }

    /// Phases whose entry is the moment a game can end.
    pub fn is_attack(self) -> bool {
        self.role() == Some(Role::Attack)
    }

    pub fn is_terminal(self) -> bool {
        self == Phase::GameOver
    }
}
