#![no_main]

use gridsplit_layout::{AreaGrid, compute_gutters, extract_areas, restore_areas, transform_areas};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Errors are fine; panics are not.
    let Ok(grid) = AreaGrid::parse(text) else {
        return;
    };

    let areas = extract_areas(&grid);
    assert_eq!(areas.len(), grid.area_count(), "every area gets lines");
    for lines in areas.values() {
        assert!(lines.row_span() >= 1 && lines.col_span() >= 1, "empty area");
        assert!(lines.row_end as usize <= grid.rows() + 1, "row end OOB");
        assert!(lines.col_end as usize <= grid.cols() + 1, "col end OOB");
    }
    let split = transform_areas(&areas).expect("grid lines fit in split space");
    assert_eq!(restore_areas(&split), areas);

    let gutters = compute_gutters(&grid);
    assert_eq!(
        gutters.all_names.len(),
        gutters.row_gutters.len() + gutters.column_gutters.len()
    );

    let reparsed = AreaGrid::parse(&grid.to_string()).expect("display output reparses");
    assert_eq!(reparsed, grid);
});
