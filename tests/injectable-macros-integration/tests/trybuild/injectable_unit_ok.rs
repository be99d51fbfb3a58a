use di_abstractions::Injectable;
use injectable_macros::Injectable;

#[derive(Injectable)]
struct Empty {}

#[derive(Injectable)]
struct Marker;

fn main() {
    assert_eq!(Empty::describe().constructor_count(), 1);
    assert_eq!(Marker::describe().properties().len(), 0);
}
