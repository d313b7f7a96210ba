use mopsolver::Position;

const SAMPLE: &str = "0 0 1 0 0
1 0 1 0 1
0 0 0 0 1
0 1 1 0 1
0 0 0 0 0
";

#[test]
fn render_unsolved_grid_with_border() {
    let grid = mopsolver::load(SAMPLE).unwrap();
    let expect = "\
|-----------|
  . . # . . |
| # . # . # |
| . . . . # |
| . # # . # |
| . . . . .  
|-----------|
";

    assert_eq!(mopsolver::render(&grid, &[]), expect);
    assert_eq!(grid.to_string(), expect);
}

#[test]
fn render_solved_grid_marks_path() {
    let mut grid = mopsolver::load(SAMPLE).unwrap();
    let solution = mopsolver::solve(&mut grid).unwrap();
    let path = solution.path().unwrap();
    let expect = "\
|-----------|
  + + # . . |
| # + # . # |
| . + + + # |
| . # # + # |
| . . . + +  
|-----------|
";

    let first = mopsolver::render(&grid, path.cells());
    let second = mopsolver::render(&grid, path.cells());
    assert_eq!(first, expect);
    assert_eq!(first, second);
    assert_eq!(grid.to_string(), expect);
}

#[test]
fn render_given_path_cells_on_clean_grid() {
    let grid = mopsolver::load("00\n00").unwrap();
    let path = [Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)];

    assert_eq!(
        mopsolver::render(&grid, &path),
        "|-----|\n  + + |\n| . +  \n|-----|\n"
    );
}

#[test]
fn render_empty_grid() {
    let grid = mopsolver::load("").unwrap();

    assert_eq!(mopsolver::render(&grid, &[]), "|-|\n|-|\n");
}
