use super::{GameFlow, Selection};
use crate::domain::cards_logic::{can_attack_with, can_beat};
use crate::domain::{Card, Phase, Side};
use crate::errors::domain::{DomainError, ValidationKind};

fn card_at(hand: &[Card], index: usize) -> Result<Card, DomainError> {
    hand.get(index).copied().ok_or_else(|| {
        DomainError::validation(
            ValidationKind::IndexOutOfRange,
            format!("index {index} with {} cards in hand", hand.len()),
        )
    })
}

impl GameFlow {
    pub(super) fn player_attack(&mut self, selection: Selection) -> Result<Phase, DomainError> {
        match selection {
            Selection::EndAttack => {
                self.end_attack(Side::Player);
                Ok(Phase::ComputerAttack)
            }
            Selection::TakeTable => Err(DomainError::validation(
                ValidationKind::SentinelNotAllowed,
                "take-table is only valid while defending",
            )),
            Selection::Card(index) => {
                let card = card_at(&self.player_hand, index)?;
                if !can_attack_with(card, &self.table) {
                    return Err(DomainError::validation(
                        ValidationKind::IllegalAttack,
                        format!("{card} does not match a rank on the table"),
                    ));
                }
                self.player_hand.remove(index);
                self.table.push_attack(card);
                self.stats.attacks += 1;
                Ok(Phase::ComputerDefend)
            }
        }
    }

    pub(super) fn player_defend(&mut self, selection: Selection) -> Result<Phase, DomainError> {
        match selection {
            Selection::TakeTable => {
                self.take_table(Side::Player);
                Ok(Phase::ComputerAttack)
            }
            Selection::EndAttack => Err(DomainError::validation(
                ValidationKind::SentinelNotAllowed,
                "end-move is only valid while attacking",
            )),
            Selection::Card(index) => {
                let card = card_at(&self.player_hand, index)?;
                let trump = self.require_trump("player_defend")?;
                let target = self.table.target_card().ok_or_else(|| {
                    DomainError::validation(ValidationKind::NoTarget, "nothing to defend against")
                })?;
                if !can_beat(target, card, trump) {
                    return Err(DomainError::validation(
                        ValidationKind::IllegalDefense,
                        format!("{card} does not beat {target}"),
                    ));
                }
                self.table.beat_target(card)?;
                self.player_hand.remove(index);
                self.stats.defenses += 1;
                Ok(Phase::ComputerAttack)
            }
        }
    }
}
