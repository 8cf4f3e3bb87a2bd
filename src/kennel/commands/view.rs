use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: &str) -> Result<CmdResult> {
    let dog = store.get_dog(id)?;
    Ok(CmdResult::default().with_listed_dogs(vec![dog]))
}
