use tracing::{debug, warn};

use super::{GameFlow, Selection};
use crate::ai::{select_move, AiError, AiFailureMode, AiPlayer};
use crate::domain::cards_logic::{legal_attacks, legal_defenses};
use crate::domain::{Phase, Role, Side};
use crate::errors::domain::DomainError;

impl GameFlow {
    /// Let `ai` choose for the player seat. `Ok(None)` outside the player phases.
    pub fn player_choice(&self, ai: &dyn AiPlayer) -> Result<Option<Selection>, AiError> {
        if self.phase.actor() != Some(Side::Player) {
            return Ok(None);
        }
        let (Some(role), Some(view)) = (self.phase.role(), self.seat_view(Side::Player)) else {
            return Ok(None);
        };
        let choice = match role {
            Role::Attack => ai.choose_attack(&view)?,
            Role::Defend => ai.choose_defense(&view)?,
        };
        Ok(Some(Selection::from_choice(role, choice)))
    }

    /// Computer attacks, or passes when it has nothing (more) to attack with.
    pub(super) fn computer_attack(&mut self) -> Result<Phase, DomainError> {
        match self.ask_computer(Role::Attack)? {
            Some(index) => {
                let card = self.computer_hand.remove(index);
                debug!(%card, "computer attacks");
                self.table.push_attack(card);
                self.stats.attacks += 1;
                Ok(Phase::PlayerDefend)
            }
            None => {
                debug!("computer passes");
                self.end_attack(Side::Computer);
                Ok(Phase::PlayerAttack)
            }
        }
    }

    /// Computer beats the target, or takes the table when it cannot.
    pub(super) fn computer_defend(&mut self) -> Result<Phase, DomainError> {
        match self.ask_computer(Role::Defend)? {
            Some(index) => {
                let card = self.computer_hand[index];
                self.table.beat_target(card)?;
                self.computer_hand.remove(index);
                debug!(%card, "computer defends");
                self.stats.defenses += 1;
                Ok(Phase::PlayerAttack)
            }
            None => {
                debug!("computer takes the table");
                self.take_table(Side::Computer);
                Ok(Phase::PlayerAttack)
            }
        }
    }

    /// Ask the computer's AI for a move and make sure it is legal.
    ///
    /// AI errors and illegal indices go through the failure mode; with
    /// `FallbackHeuristic` the serial selector answers instead.
    fn ask_computer(&mut self, role: Role) -> Result<Option<usize>, DomainError> {
        let trump = self.require_trump("ask_computer")?;
        let proposed = {
            let view = self
                .seat_view(Side::Computer)
                .ok_or_else(|| DomainError::invariant("computer seat has no view"))?;
            match role {
                Role::Attack => self.computer.choose_attack(&view),
                Role::Defend => self.computer.choose_defense(&view),
            }
        };

        let failure = match proposed {
            Ok(None) => return Ok(None),
            Ok(Some(index)) => {
                let legal = match role {
                    Role::Attack => legal_attacks(&self.computer_hand, &self.table),
                    Role::Defend => legal_defenses(&self.computer_hand, &self.table, trump),
                };
                if legal.contains(&index) {
                    return Ok(Some(index));
                }
                AiError::InvalidMove(format!("index {index} is not a legal {role:?} move"))
            }
            Err(err) => err,
        };

        match self.failure_mode {
            AiFailureMode::Panic => {
                panic!("computer AI '{}' failed: {failure}", self.computer.name())
            }
            AiFailureMode::FallbackHeuristic => {
                warn!(
                    ai = self.computer.name(),
                    ?role,
                    error = %failure,
                    "AI failed, falling back to serial heuristic"
                );
                self.stats.ai_fallbacks += 1;
                Ok(select_move(&self.computer_hand, &self.table, trump, role, 1))
            }
        }
    }
}
