use coursebox::api::CourseboxApi;
use coursebox::error::BoxError;
use coursebox::model::Kind;
use coursebox::trace::{PageAddress, Tab};

#[test]
fn test_full_workflow_survives_reopen() {
    let home = tempfile::tempdir().unwrap();

    {
        let mut api = CourseboxApi::open(home.path()).unwrap();
        api.execute("add / module cg2222 Accounting").unwrap();
        api.execute("view / modules cg2222 files").unwrap();
        for name in ["Sales Q1.xlsx", "costs.xlsx", "sales Q2.xlsx"] {
            api.execute(&format!("add / file {}", name)).unwrap();
        }
        api.execute("update-* / file 1,3 done").unwrap();
        api.execute("add / grade Midterm weightage: 30%").unwrap();
        api.execute("score / grade 1 27/30").unwrap();
        api.execute("add / exam finals at: 01/12/2019 09:00 to 01/12/2019 11:00")
            .unwrap();
        api.execute("set-name / task 1 to: final exam").unwrap();
    }

    let mut api = CourseboxApi::open(home.path()).unwrap();
    assert_eq!(api.current_page(), &PageAddress::main());
    let module = api.registry().get("CG2222").unwrap();
    assert_eq!(
        module.numbered(Kind::File),
        vec![
            "1. [DOWNLOADED] Sales Q1.xlsx",
            "2. [NOT DOWNLOADED] costs.xlsx",
            "3. [DOWNLOADED] sales Q2.xlsx",
        ]
    );
    assert_eq!(
        module.numbered(Kind::Grade),
        vec!["1. [GRADED] Midterm (weightage: 30%): 27/30"]
    );
    assert_eq!(
        module.numbered(Kind::Task),
        vec!["1. [EXAM][NOT DONE] final exam (at: 01/12/2019 09:00 to 01/12/2019 11:00)"]
    );

    api.execute("view / modules cg2222 files").unwrap();
    assert_eq!(
        api.current_page(),
        &PageAddress::module_tab("CG2222", Tab::Files)
    );
    let found = api.execute("find / sales").unwrap();
    assert_eq!(
        found.listing,
        vec!["1. [DOWNLOADED] Sales Q1.xlsx", "2. [DOWNLOADED] sales Q2.xlsx"]
    );
}

#[test]
fn test_rejected_batches_change_nothing() {
    let home = tempfile::tempdir().unwrap();
    let mut api = CourseboxApi::open(home.path()).unwrap();
    api.execute("add / module cg1111 EPP").unwrap();
    for i in 1..=3 {
        api.execute(&format!("add cg1111 / todo Task {}", i)).unwrap();
    }

    assert!(matches!(
        api.execute("remove-* cg1111 / task 1,4"),
        Err(BoxError::Index(_))
    ));
    assert!(matches!(
        api.execute("remove-* cg1111 / task 2,2"),
        Err(BoxError::Validation(_))
    ));
    assert!(matches!(
        api.execute("remove-* cg1111 / task 2"),
        Err(BoxError::Parse(_))
    ));

    let reopened = CourseboxApi::open(home.path()).unwrap();
    assert_eq!(reopened.registry().get("CG1111").unwrap().len(Kind::Task), 3);
}

#[test]
fn test_removing_a_module_deletes_its_data() {
    let home = tempfile::tempdir().unwrap();
    let mut api = CourseboxApi::open(home.path()).unwrap();
    api.execute("add / module cg1111 EPP").unwrap();
    api.execute("add cg1111 / note hello").unwrap();
    assert!(home.path().join("CG1111").join("notes.txt").exists());

    api.execute("remove / module cg1111").unwrap();
    assert!(!home.path().join("CG1111").exists());
    assert!(CourseboxApi::open(home.path()).unwrap().registry().is_empty());
}
