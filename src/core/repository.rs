use crate::core::library::LibraryResult;

pub trait Repository<Entity> {
    // create an entity
    fn create(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity
    fn update(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    fn delete(&mut self, id: &str) -> LibraryResult<Entity>;

    // all entities, in no particular order
    fn find_all(&self) -> Vec<Entity>;

    fn count(&self) -> usize;
}
