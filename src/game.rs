use std::fmt::Debug;

/// A two-player board that the search engine can explore by placing and
/// removing marks in place.
pub(crate) trait Game: Clone + std::fmt::Display {
    type Action: Debug + PartialEq + Eq + Clone + Copy;
    type Player: PartialEq + Debug + Clone + Copy;

    /// Legal actions in a stable order. The search breaks ties by this order.
    fn get_available_moves(&self) -> Vec<Self::Action>;

    /// Place `player`'s mark. Only called with actions from `get_available_moves`.
    fn place(&mut self, action: Self::Action, player: Self::Player);

    fn undo(&mut self, action: Self::Action);

    fn opponent(player: Self::Player) -> Self::Player;

    fn is_winner(&self, player: Self::Player) -> bool;

    /// No moves left. Says nothing about winners.
    fn done(&self) -> bool;
}
