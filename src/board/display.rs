use std::fmt;

use super::Position;

/// ASCII diagram with rank 8 at the top, White pieces in uppercase.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for (row, cells) in self.squares.chunks(8).enumerate() {
            write!(f, "{} |", 8 - row)?;
            for cell in cells {
                let ch = cell.map_or('.', |piece| piece.to_fen_char());
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        write!(f, "{} to move", self.side_to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagram_orientation() {
        let text = Position::starting().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "8 | r | n | b | q | k | b | n | r |");
        assert_eq!(lines[15], "1 | R | N | B | Q | K | B | N | R |");
        assert_eq!(lines[7], "5 | . | . | . | . | . | . | . | . |");
        assert!(text.ends_with("White to move"));
    }
}
