//! Service orchestration tests for task creation, lookup, and listing.

use super::mock_repository::MockRepository;
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::TaskId,
    ports::TaskRepositoryError,
    services::{CreateMultipleTasksCommand, CreateTaskCommand, TaskServices, TaskUseCaseError},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::io;
use std::sync::Arc;

type InMemoryServices = TaskServices<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn services() -> InMemoryServices {
    TaskServices::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

async fn stored_total(services: &InMemoryServices) -> u64 {
    services
        .get_tasks
        .execute(0, 100)
        .await
        .expect("listing should succeed")
        .pagination
        .total_count
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_stores_trimmed_values(services: InMemoryServices) {
    let created = services
        .create_task
        .execute(CreateTaskCommand::new("  Buy milk  ", " two litres "))
        .await
        .expect("task creation should succeed");

    assert_eq!(created.label, "Buy milk");
    assert_eq!(created.description, "two litres");
    assert!(!created.completed);

    let fetched = services
        .get_task_by_id
        .execute(TaskId::from_uuid(created.id))
        .await
        .expect("created task should be retrievable");
    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_accepts_long_labels(services: InMemoryServices) {
    let label = "x".repeat(300);

    let created = services
        .create_task
        .execute(CreateTaskCommand::new(label.clone(), "desc"))
        .await
        .expect("labels have no length limit");

    assert_eq!(created.label, label);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_honours_explicit_completion(services: InMemoryServices) {
    let created = services
        .create_task
        .execute(CreateTaskCommand::new("Done", "Already").with_completed(true))
        .await
        .expect("task creation should succeed");

    assert!(created.completed);
}

#[rstest]
#[case("   ", "valid", "INVALID_TASK_LABEL")]
#[case("valid", "", "INVALID_TASK_DESCRIPTION")]
#[case("", "", "INVALID_TASK_LABEL")]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_rejects_blank_text(
    services: InMemoryServices,
    #[case] label: &str,
    #[case] description: &str,
    #[case] expected_code: &str,
) {
    let err = services
        .create_task
        .execute(CreateTaskCommand::new(label, description))
        .await
        .expect_err("blank text must be rejected");

    assert!(matches!(err, TaskUseCaseError::DomainValidation(_)));
    assert_eq!(err.code(), expected_code);
    assert_eq!(stored_total(&services).await, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn bulk_creation_preserves_input_order(services: InMemoryServices) {
    let command = CreateMultipleTasksCommand::new([
        CreateTaskCommand::new("first", "1"),
        CreateTaskCommand::new("second", "2").with_completed(true),
        CreateTaskCommand::new("third", "3"),
    ]);

    let response = services
        .create_multiple_tasks
        .execute(command)
        .await
        .expect("bulk creation should succeed");

    let labels: Vec<_> = response.tasks.iter().map(|task| task.label.as_str()).collect();
    assert_eq!(labels, ["first", "second", "third"]);
    assert_eq!(
        response.tasks.iter().map(|task| task.completed).collect::<Vec<_>>(),
        [false, true, false]
    );
    assert_eq!(stored_total(&services).await, 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn bulk_creation_is_all_or_nothing(services: InMemoryServices) {
    let command = CreateMultipleTasksCommand::new([
        CreateTaskCommand::new("fine", "fine"),
        CreateTaskCommand::new("broken", "  "),
        CreateTaskCommand::new("", "also broken"),
    ]);

    let err = services
        .create_multiple_tasks
        .execute(command)
        .await
        .expect_err("an invalid entry must abort the batch");

    assert_eq!(err.code(), "INVALID_TASK_DESCRIPTION");
    assert_eq!(stored_total(&services).await, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn bulk_creation_never_reaches_repository_on_invalid_input() {
    let mut repository = MockRepository::new();
    repository.expect_save_all().never();
    let services = TaskServices::new(Arc::new(repository), Arc::new(DefaultClock));

    let result = services
        .create_multiple_tasks
        .execute(CreateMultipleTasksCommand::new([CreateTaskCommand::new("", "x")]))
        .await;

    assert!(matches!(result, Err(TaskUseCaseError::DomainValidation(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_bulk_creation_returns_empty_list(services: InMemoryServices) {
    let response = services
        .create_multiple_tasks
        .execute(CreateMultipleTasksCommand::default())
        .await
        .expect("an empty batch is valid");

    assert!(response.tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_unknown_task_reports_not_found(services: InMemoryServices) {
    let missing = TaskId::new();
    let err = services
        .get_task_by_id
        .execute(missing)
        .await
        .expect_err("unknown id must fail");

    assert!(matches!(err, TaskUseCaseError::TaskNotFound(id) if id == missing));
    assert_eq!(err.code(), "TASK_NOT_FOUND");
}

#[rstest]
#[case(-1, 10, "PAGE_NUMBER_NEGATIVE")]
#[case(0, -1, "PAGE_SIZE_NEGATIVE")]
#[case(0, 101, "PAGE_SIZE_TOO_LARGE")]
#[case(-1, 101, "PAGE_NUMBER_NEGATIVE")]
#[case(-5, -5, "PAGE_NUMBER_NEGATIVE")]
#[case(0, i64::MAX, "PAGE_SIZE_TOO_LARGE")]
#[tokio::test(flavor = "multi_thread")]
async fn listing_rejects_invalid_paging(
    services: InMemoryServices,
    #[case] page: i64,
    #[case] size: i64,
    #[case] expected_code: &str,
) {
    let err = services
        .get_tasks
        .execute(page, size)
        .await
        .expect_err("invalid paging must fail");

    assert_eq!(err.code(), expected_code);
}

#[rstest]
#[case(0, 100)]
#[case(0, 0)]
#[case(42, 10)]
#[tokio::test(flavor = "multi_thread")]
async fn listing_accepts_boundary_paging(
    services: InMemoryServices,
    #[case] page: i64,
    #[case] size: i64,
) {
    services
        .create_task
        .execute(CreateTaskCommand::new("only", "one"))
        .await
        .expect("task creation should succeed");

    let listed = services
        .get_tasks
        .execute(page, size)
        .await
        .expect("boundary paging is valid");

    assert_eq!(listed.pagination.page, u64::try_from(page).expect("non-negative"));
    assert_eq!(listed.pagination.size, u32::try_from(size).expect("in range"));
    assert_eq!(listed.pagination.total_count, 1);
    if size == 0 || page > 0 {
        assert!(listed.items.is_empty());
    } else {
        assert_eq!(listed.items.len(), 1);
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_windows_tasks_in_creation_order(services: InMemoryServices) {
    for label in ["a", "b", "c"] {
        services
            .create_task
            .execute(CreateTaskCommand::new(label, "entry"))
            .await
            .expect("task creation should succeed");
    }

    let first = services.get_tasks.execute(0, 2).await.expect("page 0");
    let second = services.get_tasks.execute(1, 2).await.expect("page 1");

    let labels = |page: &crate::task::services::TaskCatalogueResponse| {
        page.items
            .iter()
            .map(|task| task.label.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(labels(&first), ["a", "b"]);
    assert_eq!(labels(&second), ["c"]);
    assert_eq!(first.pagination.total_count, 3);
    assert_eq!(second.pagination.total_count, 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repository_failures_surface_as_internal_errors() {
    let mut repository = MockRepository::new();
    repository
        .expect_save()
        .times(1)
        .returning(|_| Err(TaskRepositoryError::persistence(io::Error::other("disk on fire"))));
    let services = TaskServices::new(Arc::new(repository), Arc::new(DefaultClock));

    let err = services
        .create_task
        .execute(CreateTaskCommand::new("label", "description"))
        .await
        .expect_err("repository failure must propagate");

    assert!(matches!(err, TaskUseCaseError::Repository(_)));
    assert_eq!(err.code(), "INTERNAL_ERROR");
}
