use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct SimpleUser {
    id: u32,
    name: String,
}

#[derive(Debug)]
struct SimpleUserCreate {
    id: u32,
    name: String,
}

#[derive(Debug)]
struct SimpleUserUpdate {
    name: Option<String>,
}

#[derive(Debug, thiserror::Error)]
#[error("Simple user error")]
struct SimpleUserError;

#[async_trait]
impl ActorEntity for SimpleUser {
    type Id = u32;
    type Create = SimpleUserCreate;
    type Update = SimpleUserUpdate;
    type Query = String;
    type Context = ();
    type Error = SimpleUserError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_create_params(params: SimpleUserCreate) -> Result<Self, Self::Error> {
        if params.name.is_empty() {
            return Err(SimpleUserError);
        }
        Ok(Self {
            id: params.id,
            name: params.name,
        })
    }

    fn matches(&self, query: &String) -> bool {
        self.name.contains(query.as_str())
    }

    async fn on_update(
        &mut self,
        update: SimpleUserUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        Ok(())
    }
}

fn create(id: u32, name: &str) -> SimpleUserCreate {
    SimpleUserCreate {
        id,
        name: name.to_string(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<SimpleUser>::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Create uses the caller's id
    let id: u32 = client.create(create(7, "Alice")).await.unwrap();
    assert_eq!(id, 7);

    // 2. Update
    let update = SimpleUserUpdate {
        name: Some("Bob".into()),
    };
    let updated = client.update(id, update).await.unwrap();
    assert_eq!(updated.unwrap().name, "Bob");

    let user: SimpleUser = client.get(id).await.unwrap().unwrap();
    assert_eq!(user.name, "Bob");

    // 3. Delete answers the removed entity
    let removed = client.delete(id).await.unwrap();
    assert_eq!(removed.map(|u| u.name), Some("Bob".to_string()));
    assert!(client.get(id).await.unwrap().is_none());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_rejected_creates_leave_store_untouched() {
    let (actor, client) = ResourceActor::<SimpleUser>::new(10);
    tokio::spawn(actor.run(()));

    client.create(create(1, "Alice")).await.unwrap();

    let duplicate = client.create(create(1, "Mallory")).await;
    assert!(matches!(duplicate, Err(FrameworkError::AlreadyExists(id)) if id == "1"));

    let invalid = client.create(create(2, "")).await;
    assert!(matches!(invalid, Err(FrameworkError::EntityError(_))));

    let all = client.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Alice");
}

#[tokio::test]
async fn test_missing_ids_are_silent_no_ops() {
    let (actor, client) = ResourceActor::<SimpleUser>::new(10);
    tokio::spawn(actor.run(()));

    client.create(create(1, "Alice")).await.unwrap();

    let update = SimpleUserUpdate {
        name: Some("Ghost".into()),
    };
    assert!(client.update(99, update).await.unwrap().is_none());
    assert!(client.delete(99).await.unwrap().is_none());
    assert_eq!(client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_search_and_list_keep_insertion_order() {
    let (actor, client) = ResourceActor::<SimpleUser>::new(10);
    tokio::spawn(actor.run(()));

    for (id, name) in [(3, "Carla"), (1, "Carl"), (2, "Dana")] {
        client.create(create(id, name)).await.unwrap();
    }

    let ids: Vec<u32> = client.list().await.unwrap().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);

    let hits: Vec<u32> = client
        .search("Carl".to_string())
        .await
        .unwrap()
        .iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(hits, vec![3, 1]);
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let (actor, client) = ResourceActor::<SimpleUser>::new(10);
    drop(actor);

    let result = client.list().await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
