use tabulex_solver::{SolveResult, TableauSnapshot};

/// Render the whole solve trace: every tableau, the status and, when
/// present, the optimal solution.
pub fn render_result(result: &SolveResult) -> String {
    let mut out = String::new();

    for snapshot in &result.tableaux {
        out.push_str(&render_snapshot(snapshot));
        out.push('\n');
    }

    out.push_str(&format!("Estado: {}\n", result.status.as_str()));

    if let Some(solution) = &result.solution {
        out.push_str(&format!("Valor óptimo: {}\n", solution.objective_value));
        for (name, value) in &solution.variables {
            out.push_str(&format!("  {} = {}\n", name, value));
        }
    }

    out
}

/// Render one tableau as an aligned text table
pub fn render_snapshot(snapshot: &TableauSnapshot) -> String {
    let columns = snapshot.headers.len();

    let mut grid: Vec<Vec<String>> = Vec::new();
    grid.push(snapshot.headers.clone());
    for row in snapshot
        .rows
        .iter()
        .chain(std::iter::once(&snapshot.objective_row))
    {
        let mut cells = Vec::with_capacity(columns);
        cells.push(row.label.clone());
        cells.extend(row.values.iter().map(|v| format!("{}", v)));
        grid.push(cells);
    }

    let mut widths = vec![0usize; columns];
    for cells in &grid {
        for (j, cell) in cells.iter().enumerate() {
            widths[j] = widths[j].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&snapshot.title);
    out.push('\n');

    for (r, cells) in grid.iter().enumerate() {
        let line: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(j, cell)| {
                if j == 0 {
                    format!("{:<1$}", cell, widths[j])
                } else {
                    format!("{:>1$}", cell, widths[j])
                }
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');

        // Separador bajo los encabezados
        if r == 0 {
            let total: usize = widths.iter().sum::<usize>() + 2 * (columns - 1);
            out.push_str(&"-".repeat(total));
            out.push('\n');
        }
    }

    out
}
