use crate::chess::core::{Move, Player, Square};

#[derive(Debug, PartialEq, Eq)]
pub(super) enum Command {
    Click(Square),
    Moves(Square),
    Move(Move),
    Board,
    Fen,
    SetPosition {
        placement: String,
        active: Player,
    },
    NewGame,
    Perft {
        depth: u8,
    },
    Quit,
    Unknown(String),
}

fn parse_move(parts: &[&str]) -> Option<Move> {
    match parts {
        [input] => Move::try_from(*input).ok(),
        [from, to] => Some(Move::new(
            Square::try_from(*from).ok()?,
            Square::try_from(*to).ok()?,
        )),
        _ => None,
    }
}

fn parse_setposition(parts: &[&str]) -> Option<Command> {
    let (placement, active) = match parts {
        [placement] => (*placement, Player::White),
        [placement, active] => (*placement, Player::try_from(*active).ok()?),
        _ => return None,
    };
    Some(Command::SetPosition {
        placement: placement.to_string(),
        active,
    })
}

impl Command {
    pub(super) fn parse(input: &str) -> Self {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let unknown = || Self::Unknown(input.trim().to_string());
        let parsed = match parts.as_slice() {
            [] => None,
            ["board" | "d"] => Some(Self::Board),
            ["fen"] => Some(Self::Fen),
            ["new" | "restart"] => Some(Self::NewGame),
            ["quit"] => Some(Self::Quit),
            ["click", square] => Square::try_from(*square).ok().map(Self::Click),
            ["moves", square] => Square::try_from(*square).ok().map(Self::Moves),
            ["move", rest @ ..] => parse_move(rest).map(Self::Move),
            ["position", rest @ ..] => parse_setposition(rest),
            ["perft", depth] => depth.parse().ok().map(|depth| Self::Perft { depth }),
            // A bare square is a click.
            [square] => Square::try_from(*square).ok().map(Self::Click),
            _ => None,
        };
        parsed.unwrap_or_else(unknown)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn square(input: &str) -> Square {
        Square::try_from(input).unwrap()
    }

    #[test]
    fn simple_commands() {
        assert_eq!(Command::parse("board"), Command::Board);
        assert_eq!(Command::parse("d\n"), Command::Board);
        assert_eq!(Command::parse("fen"), Command::Fen);
        assert_eq!(Command::parse("new"), Command::NewGame);
        assert_eq!(Command::parse("restart"), Command::NewGame);
        assert_eq!(Command::parse("  quit  "), Command::Quit);
    }

    #[test]
    fn clicks() {
        assert_eq!(Command::parse("e2"), Command::Click(square("e2")));
        assert_eq!(Command::parse("click h8"), Command::Click(square("h8")));
        assert_eq!(Command::parse("moves b1"), Command::Moves(square("b1")));
        assert_eq!(Command::parse("i9"), Command::Unknown("i9".to_string()));
        assert_eq!(
            Command::parse("click"),
            Command::Unknown("click".to_string())
        );
    }

    #[test]
    fn moves() {
        let expected = Command::Move(Move::new(square("e2"), square("e4")));
        assert_eq!(Command::parse("move e2e4"), expected);
        assert_eq!(Command::parse("move e2 e4"), expected);
        assert_eq!(
            Command::parse("move e2e"),
            Command::Unknown("move e2e".to_string())
        );
        assert_eq!(
            Command::parse("move e2 e4 e5"),
            Command::Unknown("move e2 e4 e5".to_string())
        );
    }

    #[test]
    fn setposition() {
        assert_eq!(
            Command::parse("position 8/8/8/8/8/8/8/8 b"),
            Command::SetPosition {
                placement: "8/8/8/8/8/8/8/8".to_string(),
                active: Player::Black,
            }
        );
        assert_eq!(
            Command::parse("position 8/8/8/8/8/8/8/8"),
            Command::SetPosition {
                placement: "8/8/8/8/8/8/8/8".to_string(),
                active: Player::White,
            }
        );
        assert_eq!(
            Command::parse("position 8/8/8/8/8/8/8/8 x"),
            Command::Unknown("position 8/8/8/8/8/8/8/8 x".to_string())
        );
    }

    #[test]
    fn perft() {
        assert_eq!(Command::parse("perft 3"), Command::Perft { depth: 3 });
        assert_eq!(
            Command::parse("perft deep"),
            Command::Unknown("perft deep".to_string())
        );
    }

    #[test]
    fn unknown() {
        assert_eq!(Command::parse(""), Command::Unknown(String::new()));
        assert_eq!(
            Command::parse("castle kingside"),
            Command::Unknown("castle kingside".to_string())
        );
    }
}
