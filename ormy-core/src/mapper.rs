use crate::{
    Cursor, Destination, FieldMap, FieldMapCache, Ignored, Record, Result, Shape, Target,
    destination::check_shape,
};

/// Copies cursor rows into records.
///
/// Columns without a matching field are discarded. The column to field layout
/// is computed once per query, when a column name repeats its last occurrence
/// feeds the field.
#[derive(Debug, Clone, Copy)]
pub struct ResultMapper<'c> {
    cache: &'c FieldMapCache,
}

impl<'c> ResultMapper<'c> {
    pub fn new(cache: &'c FieldMapCache) -> Self {
        Self { cache }
    }

    /// Populates `destination` from every remaining row of `cursor` and
    /// returns the number of rows mapped.
    pub async fn materialize<C, D>(
        &self,
        cursor: &mut C,
        destination: &mut D,
        expected: Shape,
    ) -> Result<usize>
    where
        C: Cursor,
        D: Destination,
    {
        check_shape::<D>(expected)?;
        let field_map = self.cache.field_map_for::<D::Record>();
        let layout = layout(&field_map, cursor.columns());
        let mut rows = 0;
        while cursor.advance().await? {
            destination.accept_row(|record| fill_row(record, &layout, cursor))?;
            rows += 1;
        }
        Ok(rows)
    }
}

/// Field index for each column, `None` for the discarded ones.
fn layout(field_map: &FieldMap, columns: &[String]) -> Vec<Option<usize>> {
    let mut layout = vec![None; columns.len()];
    let mut taken = Vec::new();
    for (position, column) in columns.iter().enumerate().rev() {
        match field_map.get(column) {
            Some(index) if !taken.contains(&index) => {
                taken.push(index);
                layout[position] = Some(index);
            }
            Some(..) => {}
            None => log::debug!(
                "Column `{}` has no field in `{}`, it will be discarded",
                column,
                field_map.type_name()
            ),
        }
    }
    layout
}

fn fill_row<R: Record, C: Cursor>(
    record: &mut R,
    layout: &[Option<usize>],
    cursor: &mut C,
) -> Result<()> {
    let mut fields = record.targets().into_iter().map(Some).collect::<Vec<_>>();
    let mut ignored = vec![Ignored; layout.len()];
    let mut targets: Vec<&mut dyn Target> = Vec::with_capacity(layout.len());
    for (&index, ignored) in layout.iter().zip(ignored.iter_mut()) {
        match index.and_then(|i| fields.get_mut(i).and_then(Option::take)) {
            Some(target) => targets.push(target),
            None => targets.push(ignored),
        }
    }
    cursor.populate(&mut targets)
}
