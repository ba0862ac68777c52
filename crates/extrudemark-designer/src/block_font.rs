//! Built-in block font used when no font file is configured.
//!
//! Each glyph is a 5×7 cell bitmap. Filled cells are merged greedily into
//! rectangles, and every rectangle becomes one closed subpath, so the
//! outlines contain only straight segments. Lowercase letters fold to
//! uppercase.

use extrudemark_core::{Error, GlyphOutline, PathCommand, Point, Result};

use crate::outline::OutlineProvider;

const UNITS_PER_EM: f64 = 1000.0;
const CELL: f64 = 100.0;
const COLUMNS: usize = 5;
const ROWS: usize = 7;
const ADVANCE: f64 = (COLUMNS as f64 + 1.0) * CELL;
const SPACE_ADVANCE: f64 = 4.0 * CELL;

type Bitmap = [&'static str; ROWS];

#[rustfmt::skip]
fn bitmap(ch: char) -> Option<Bitmap> {
    let rows = match ch {
        'A' => [".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"],
        'B' => ["####.", "#...#", "#...#", "####.", "#...#", "#...#", "####."],
        'C' => [".###.", "#...#", "#....", "#....", "#....", "#...#", ".###."],
        'D' => ["####.", "#...#", "#...#", "#...#", "#...#", "#...#", "####."],
        'E' => ["#####", "#....", "#....", "####.", "#....", "#....", "#####"],
        'F' => ["#####", "#....", "#....", "####.", "#....", "#....", "#...."],
        'G' => [".###.", "#...#", "#....", "#.###", "#...#", "#...#", ".####"],
        'H' => ["#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"],
        'I' => [".###.", "..#..", "..#..", "..#..", "..#..", "..#..", ".###."],
        'J' => ["..###", "...#.", "...#.", "...#.", "...#.", "#..#.", ".##.."],
        'K' => ["#...#", "#..#.", "#.#..", "##...", "#.#..", "#..#.", "#...#"],
        'L' => ["#....", "#....", "#....", "#....", "#....", "#....", "#####"],
        'M' => ["#...#", "##.##", "#.#.#", "#.#.#", "#...#", "#...#", "#...#"],
        'N' => ["#...#", "#...#", "##..#", "#.#.#", "#..##", "#...#", "#...#"],
        'O' => [".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."],
        'P' => ["####.", "#...#", "#...#", "####.", "#....", "#....", "#...."],
        'Q' => [".###.", "#...#", "#...#", "#...#", "#.#.#", "#..#.", ".##.#"],
        'R' => ["####.", "#...#", "#...#", "####.", "#.#..", "#..#.", "#...#"],
        'S' => [".####", "#....", "#....", ".###.", "....#", "....#", "####."],
        'T' => ["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#.."],
        'U' => ["#...#", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."],
        'V' => ["#...#", "#...#", "#...#", "#...#", "#...#", ".#.#.", "..#.."],
        'W' => ["#...#", "#...#", "#...#", "#.#.#", "#.#.#", "#.#.#", ".#.#."],
        'X' => ["#...#", "#...#", ".#.#.", "..#..", ".#.#.", "#...#", "#...#"],
        'Y' => ["#...#", "#...#", ".#.#.", "..#..", "..#..", "..#..", "..#.."],
        'Z' => ["#####", "....#", "...#.", "..#..", ".#...", "#....", "#####"],
        '0' => [".###.", "#...#", "#..##", "#.#.#", "##..#", "#...#", ".###."],
        '1' => ["..#..", ".##..", "..#..", "..#..", "..#..", "..#..", ".###."],
        '2' => [".###.", "#...#", "....#", "...#.", "..#..", ".#...", "#####"],
        '3' => ["#####", "...#.", "..#..", "...#.", "....#", "#...#", ".###."],
        '4' => ["...#.", "..##.", ".#.#.", "#..#.", "#####", "...#.", "...#."],
        '5' => ["#####", "#....", "####.", "....#", "....#", "#...#", ".###."],
        '6' => ["..##.", ".#...", "#....", "####.", "#...#", "#...#", ".###."],
        '7' => ["#####", "....#", "...#.", "..#..", ".#...", ".#...", ".#..."],
        '8' => [".###.", "#...#", "#...#", ".###.", "#...#", "#...#", ".###."],
        '9' => [".###.", "#...#", "#...#", ".####", "....#", "...#.", ".##.."],
        '.' => [".....", ".....", ".....", ".....", ".....", ".##..", ".##.."],
        ',' => [".....", ".....", ".....", ".....", ".##..", "..#..", ".#..."],
        '!' => ["..#..", "..#..", "..#..", "..#..", "..#..", ".....", "..#.."],
        '?' => [".###.", "#...#", "....#", "...#.", "..#..", ".....", "..#.."],
        '-' => [".....", ".....", ".....", "#####", ".....", ".....", "....."],
        '\'' => ["..#..", "..#..", ".#...", ".....", ".....", ".....", "....."],
        ':' => [".....", ".##..", ".##..", ".....", ".##..", ".##..", "....."],
        '&' => [".##..", "#..#.", "#.#..", ".#...", "#.#.#", "#..#.", ".##.#"],
        _ => return None,
    };
    Some(rows)
}

/// Cell grid of a bitmap, `true` where filled.
fn cells(rows: &Bitmap) -> [[bool; COLUMNS]; ROWS] {
    let mut grid = [[false; COLUMNS]; ROWS];
    for (r, row) in rows.iter().enumerate() {
        for (c, byte) in row.bytes().take(COLUMNS).enumerate() {
            grid[r][c] = byte == b'#';
        }
    }
    grid
}

/// Greedy rectangle cover: take each horizontal run of unused cells and
/// extend it downwards while the rows below have the same cells filled.
/// Returns `(col_start, col_end, row_start, row_end)` with exclusive ends.
fn rectangles(rows: &Bitmap) -> Vec<(usize, usize, usize, usize)> {
    let grid = cells(rows);
    let mut used = [[false; COLUMNS]; ROWS];
    let mut rects = Vec::new();

    for r in 0..ROWS {
        let mut c = 0;
        while c < COLUMNS {
            if !grid[r][c] || used[r][c] {
                c += 1;
                continue;
            }
            let start = c;
            while c < COLUMNS && grid[r][c] && !used[r][c] {
                c += 1;
            }
            let end = c;

            let mut bottom = r + 1;
            while bottom < ROWS && (start..end).all(|k| grid[bottom][k] && !used[bottom][k]) {
                bottom += 1;
            }
            for row in used.iter_mut().take(bottom).skip(r) {
                for cell in row.iter_mut().take(end).skip(start) {
                    *cell = true;
                }
            }
            rects.push((start, end, r, bottom));
        }
    }
    rects
}

/// Font-less outline source.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockFont;

impl BlockFont {
    pub fn new() -> Self {
        Self
    }

    /// Whether `ch` has a glyph (after case folding).
    pub fn supports(&self, ch: char) -> bool {
        ch.is_whitespace() || bitmap(ch.to_ascii_uppercase()).is_some()
    }
}

impl OutlineProvider for BlockFont {
    fn outline(&self, ch: char) -> Result<GlyphOutline> {
        if ch.is_whitespace() {
            return Ok(GlyphOutline::new(Vec::new(), SPACE_ADVANCE));
        }
        let rows = bitmap(ch.to_ascii_uppercase()).ok_or(Error::GlyphNotFound { character: ch })?;

        let mut commands = Vec::new();
        for (c0, c1, r0, r1) in rectangles(&rows) {
            let x0 = c0 as f64 * CELL;
            let x1 = c1 as f64 * CELL;
            let top = (ROWS - r0) as f64 * CELL;
            let bottom = (ROWS - r1) as f64 * CELL;
            commands.push(PathCommand::MoveTo(Point::new(x0, bottom)));
            commands.push(PathCommand::LineTo(Point::new(x1, bottom)));
            commands.push(PathCommand::LineTo(Point::new(x1, top)));
            commands.push(PathCommand::LineTo(Point::new(x0, top)));
            commands.push(PathCommand::Close);
        }

        Ok(GlyphOutline::new(commands, ADVANCE))
    }

    fn kerning(&self, _prev: char, _curr: char) -> f64 {
        0.0
    }

    fn units_per_em(&self) -> f64 {
        UNITS_PER_EM
    }

    fn name(&self) -> &str {
        "block"
    }
}
