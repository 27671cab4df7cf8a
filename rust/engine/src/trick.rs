use crate::actions::Play;
use crate::cards::{Card, SelectableSuit, Suit};

/// One trick: at most one play per seat, in play order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Trick {
    pub round_trump: SelectableSuit,
    pub plays: Vec<Play>,
}

impl Trick {
    pub fn new(round_trump: SelectableSuit) -> Self {
        Self {
            round_trump,
            plays: Vec::new(),
        }
    }

    pub fn is_trump(&self, card: &Card) -> bool {
        card.is_trump(self.round_trump)
    }

    pub fn leading_card(&self) -> Option<&Card> {
        self.plays.first().map(|p| &p.card)
    }

    /// A trick bleeds when trump was led; everyone holding trump must follow with it.
    pub fn bleeding(&self) -> bool {
        self.leading_card().is_some_and(|c| self.is_trump(c))
    }

    /// The led suit when it is not the round's trump suit.
    pub fn weak_trump(&self) -> Option<Suit> {
        self.leading_card()
            .map(Card::suit)
            .filter(|s| *s != Suit::from(self.round_trump))
    }

    pub fn has_played(&self, identifier: &str) -> bool {
        self.plays.iter().any(|p| p.identifier == identifier)
    }

    /// The play currently taking the trick.
    ///
    /// Trump beats everything and is ranked by `trump_value`; without trump the
    /// led suit wins, ranked by `weak_trump_value`. The earliest play wins ties.
    pub fn winning_play(&self) -> Option<&Play> {
        let trumps: Vec<&Play> = self.plays.iter().filter(|p| self.is_trump(&p.card)).collect();
        if let Some(play) = strongest(trumps, Card::trump_value) {
            return Some(play);
        }
        let weak = self.weak_trump()?;
        let led: Vec<&Play> = self.plays.iter().filter(|p| p.card.suit() == weak).collect();
        strongest(led, Card::weak_trump_value)
    }
}

fn strongest<'a>(plays: Vec<&'a Play>, key: fn(&Card) -> u8) -> Option<&'a Play> {
    plays.into_iter().fold(None, |best, play| match best {
        Some(b) if key(&b.card) >= key(&play.card) => Some(b),
        _ => Some(play),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn play(id: &str, rank: Rank, suit: SelectableSuit) -> Play {
        Play {
            identifier: id.to_string(),
            card: Card::of(rank, suit).unwrap(),
        }
    }

    #[test]
    fn empty_trick_has_no_winner() {
        let trick = Trick::new(SelectableSuit::Hearts);
        assert!(trick.winning_play().is_none());
        assert!(!trick.bleeding());
        assert!(trick.weak_trump().is_none());
    }

    #[test]
    fn trump_beats_led_suit() {
        let mut trick = Trick::new(SelectableSuit::Clubs);
        trick.plays.push(play("1", Rank::Ace, SelectableSuit::Diamonds));
        trick.plays.push(play("2", Rank::Two, SelectableSuit::Clubs));
        trick.plays.push(play("3", Rank::King, SelectableSuit::Diamonds));
        assert_eq!(trick.winning_play().unwrap().identifier, "2");
        assert!(!trick.bleeding());
        assert_eq!(trick.weak_trump(), Some(Suit::Diamonds));
    }

    #[test]
    fn off_suit_cards_cannot_win() {
        let mut trick = Trick::new(SelectableSuit::Clubs);
        trick.plays.push(play("1", Rank::Two, SelectableSuit::Diamonds));
        trick.plays.push(play("2", Rank::Ace, SelectableSuit::Spades));
        assert_eq!(trick.winning_play().unwrap().identifier, "1");
    }

    #[test]
    fn ace_of_hearts_is_trump_in_any_suit() {
        let mut trick = Trick::new(SelectableSuit::Spades);
        trick.plays.push(play("1", Rank::Ace, SelectableSuit::Hearts));
        trick.plays.push(play("2", Rank::King, SelectableSuit::Spades));
        assert!(trick.bleeding());
        assert_eq!(trick.winning_play().unwrap().identifier, "1");
        assert!(trick.weak_trump().is_some());
    }

    #[test]
    fn joker_loses_to_trump_jack_and_five() {
        let mut trick = Trick::new(SelectableSuit::Diamonds);
        trick.plays.push(play("1", Rank::Ace, SelectableSuit::Diamonds));
        trick.plays.push(Play {
            identifier: "2".to_string(),
            card: Card::joker(),
        });
        assert_eq!(trick.winning_play().unwrap().identifier, "2");
        trick.plays.push(play("3", Rank::Jack, SelectableSuit::Diamonds));
        assert_eq!(trick.winning_play().unwrap().identifier, "3");
        trick.plays.push(play("4", Rank::Five, SelectableSuit::Diamonds));
        assert_eq!(trick.winning_play().unwrap().identifier, "4");
    }

    #[test]
    fn has_played_tracks_identifiers() {
        let mut trick = Trick::new(SelectableSuit::Hearts);
        trick.plays.push(play("1", Rank::Two, SelectableSuit::Hearts));
        assert!(trick.has_played("1"));
        assert!(!trick.has_played("2"));
    }
}
