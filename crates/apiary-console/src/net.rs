//! Coloured cube net.

use std::io::{self, Write};

use apiary_core::{Color, Cube, Face};
use owo_colors::OwoColorize;

fn sticker(color: Color) -> String {
    let block = "■";
    match color {
        Color::Green => block.green().to_string(),
        Color::Blue => block.blue().to_string(),
        Color::White => block.bright_white().to_string(),
        Color::Yellow => block.bright_yellow().to_string(),
        Color::Orange => block.truecolor(255, 140, 0).to_string(),
        Color::Red => block.red().to_string(),
    }
}

fn row(cube: &Cube, face: Face, row: usize) -> String {
    cube.grid(face)[row]
        .iter()
        .map(|&c| sticker(c))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the net with Up on top, then Left, Front, Right, Back, then Down.
pub fn format_net(cube: &Cube) -> String {
    let mut out = String::new();
    for r in 0..3 {
        out.push_str(&format!("      {}\n", row(cube, Face::Up, r)));
    }
    for r in 0..3 {
        out.push_str(&format!(
            "{} {} {} {}\n",
            row(cube, Face::Left, r),
            row(cube, Face::Front, r),
            row(cube, Face::Right, r),
            row(cube, Face::Back, r)
        ));
    }
    for r in 0..3 {
        out.push_str(&format!("      {}\n", row(cube, Face::Down, r)));
    }
    out
}

pub fn print_cube(cube: &Cube) {
    let _ = write!(io::stdout().lock(), "{}", format_net(cube));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_has_nine_rows() {
        let net = format_net(&Cube::solved());
        assert_eq!(net.lines().count(), 9);
        assert_eq!(net.matches('■').count(), 54);
    }
}
