use crate::utils::UniverseError;

/// Returns width, height and a row-major vector filled with cells of the
/// parsed plaintext pattern.
///
/// Rows are newline-separated; `#` or `O` marks an alive cell, `.` a dead
/// one. Lines starting with `!` are comments. All rows must have the same
/// width.
pub fn parse_plaintext(data: &str) -> Result<(usize, usize, Vec<bool>), UniverseError> {
    let rows = data
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty() && !line.starts_with('!'))
        .collect::<Vec<_>>();
    let width = match rows.first() {
        Some(first) => first.chars().count(),
        None => return Err(UniverseError::InvalidDimensions { width: 0, height: 0 }),
    };

    let mut cells = Vec::with_capacity(width * rows.len());
    for (y, row) in rows.iter().enumerate() {
        if row.chars().count() != width {
            return Err(UniverseError::BadPattern(format!(
                "row {} has {} cells, expected {}",
                y,
                row.chars().count(),
                width
            )));
        }
        for symbol in row.chars() {
            match symbol {
                '#' | 'O' => cells.push(true),
                '.' => cells.push(false),
                _ => {
                    return Err(UniverseError::BadPattern(format!(
                        "unexpected symbol {:?} in row {}",
                        symbol, y
                    )))
                }
            }
        }
    }
    Ok((width, rows.len(), cells))
}
