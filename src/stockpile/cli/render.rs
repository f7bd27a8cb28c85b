use stockpile::config::StockConfig;
use stockpile::model::ProductRow;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 4] = ["ID", "Name", "Price", "Quantity"];

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

const ALIGN: [Align; 4] = [Align::Right, Align::Left, Align::Right, Align::Right];

/// Render rows as a grid table:
///
/// ```text
/// +-----+----------+---------+----------+
/// |  ID | Name     |   Price | Quantity |
/// +=====+==========+=========+==========+
/// | 101 | Facewash | $120.05 |        6 |
/// +-----+----------+---------+----------+
/// ```
pub fn render_table(rows: &[ProductRow], config: &StockConfig) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.name.clone(),
                config.format_price(r.price),
                r.quantity.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    let headers = HEADERS.map(String::from);
    let mut out = String::new();
    out.push_str(&separator(&widths, '-'));
    out.push_str(&line(&headers, &widths));
    out.push_str(&separator(&widths, '='));
    for row in &cells {
        out.push_str(&line(row, &widths));
        out.push_str(&separator(&widths, '-'));
    }
    out
}

fn separator(widths: &[usize; 4], fill: char) -> String {
    let mut s = String::from("+");
    for w in widths {
        s.extend(std::iter::repeat(fill).take(w + 2));
        s.push('+');
    }
    s.push('\n');
    s
}

fn line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut s = String::from("|");
    for ((cell, width), align) in cells.iter().zip(widths).zip(ALIGN) {
        let padding = " ".repeat(width.saturating_sub(cell.width()));
        match align {
            Align::Left => s.push_str(&format!(" {}{} |", cell, padding)),
            Align::Right => s.push_str(&format!(" {}{} |", padding, cell)),
        }
    }
    s.push('\n');
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_grid() {
        let rows = vec![
            ProductRow::new(101, "Facewash", 120.05, 6),
            ProductRow::new(102, "Toothbrush", 10.79, 20),
        ];
        let table = render_table(&rows, &StockConfig::default());
        let expected = "\
+-----+------------+---------+----------+
|  ID | Name       |   Price | Quantity |
+=====+============+=========+==========+
| 101 | Facewash   | $120.05 |        6 |
+-----+------------+---------+----------+
| 102 | Toothbrush |  $10.79 |       20 |
+-----+------------+---------+----------+
";
        assert_eq!(table, expected);
    }

    #[test]
    fn uses_configured_currency_and_two_decimals() {
        let mut config = StockConfig::default();
        config.currency = "€".to_string();
        let table = render_table(&[ProductRow::new(1, "Comb", 5.0, 1)], &config);
        assert!(table.contains("€5.00"));
    }

    #[test]
    fn wide_characters_keep_columns_aligned() {
        let rows = vec![ProductRow::new(1, "茶葉", 3.5, 2)];
        let table = render_table(&rows, &StockConfig::default());
        let widths: Vec<_> = table.lines().map(|l| l.width()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}
