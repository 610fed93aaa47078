//! God cards: optional per-player rule extensions.
//!
//! Each card hooks into the turn at one fixed [`AbilityTiming`]. When the
//! orchestrator reaches that point it asks the card to
//! [`perform_ability`](GodCard::perform_ability), which yields an
//! [`AbilityOffer`]. The player then activates the offer on one of its
//! targets or declines it. Either way the card hands back a [`ResumeAt`]
//! token naming where the standard turn continues; cards never call back
//! into the orchestrator themselves.
//!
//! ## Cards
//!
//! | Card    | Timing       | Ability                                         |
//! |---------|--------------|-------------------------------------------------|
//! | Artemis | after move   | move the same worker again, not back to origin  |
//! | Demeter | after build  | build again, not on the same tile               |
//! | Zeus    | before build | may build directly beneath the worker           |

mod artemis;
mod demeter;
mod offer;
mod zeus;

pub use offer::{AbilityOffer, AbilityResolution};

use serde::{Deserialize, Serialize};

use crate::board::{Board, TileId};
use crate::core::Worker;

/// The point in a turn at which a card's ability is offered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityTiming {
    /// Replaces the ordinary build step.
    BeforeBuild,
    /// Right after the worker moves, before building.
    AfterMove,
    /// Right after the ordinary build, before the turn ends.
    AfterBuild,
}

/// Where the standard turn flow resumes once an ability resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResumeAt {
    /// The worker now stands on this tile and must build from it.
    BuildPhase(TileId),
    /// The turn is over.
    NextTurn,
}

/// A god card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GodCard {
    Artemis,
    Demeter,
    Zeus,
}

impl GodCard {
    /// Every card, in declaration order.
    pub const ALL: [GodCard; 3] = [GodCard::Artemis, GodCard::Demeter, GodCard::Zeus];

    #[must_use]
    pub const fn timing(self) -> AbilityTiming {
        match self {
            GodCard::Artemis => AbilityTiming::AfterMove,
            GodCard::Demeter => AbilityTiming::AfterBuild,
            GodCard::Zeus => AbilityTiming::BeforeBuild,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GodCard::Artemis => "Artemis",
            GodCard::Demeter => "Demeter",
            GodCard::Zeus => "Zeus",
        }
    }

    /// Short rules text for the presentation layer.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            GodCard::Artemis => {
                "Your worker may move one additional time, but not back to its initial space."
            }
            GodCard::Demeter => {
                "Your worker may build one additional time, but not on the same space."
            }
            GodCard::Zeus => "Your worker may build a block under itself.",
        }
    }

    /// Compute the offer for this card at its timing.
    ///
    /// `from` and `to` depend on the timing:
    ///
    /// - after move: origin and destination of the move
    /// - before build: both are the tile the worker stands on
    /// - after build: the worker's tile and the tile just built on
    ///
    /// Zeus grants its temporary capability here, so the worker is mutable.
    pub fn perform_ability(
        self,
        board: &Board,
        worker: &mut Worker,
        from: TileId,
        to: TileId,
    ) -> AbilityOffer {
        match self {
            GodCard::Artemis => artemis::perform(board, worker, from, to),
            GodCard::Demeter => demeter::perform(board, worker, from, to),
            GodCard::Zeus => zeus::perform(board, worker, from, to),
        }
    }
}

impl std::fmt::Display for GodCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
