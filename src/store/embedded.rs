//! SQLite adapter: a single database file owned by this process.

use crate::entity::ColumnType;
use crate::sql::{BindValue, Dialect, QueryBuf};
use chrono::{DateTime, Utc};
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqlitePool};

fn bind_all<'q>(q: &'q QueryBuf) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query(&q.sql);
    for p in &q.params {
        query = match p {
            BindValue::Int(n) => query.bind(*n),
            BindValue::Text(s) => query.bind(s.as_str()),
            BindValue::Timestamp(t) => query.bind(*t),
            BindValue::Null(ColumnType::Int) => query.bind(None::<i64>),
            BindValue::Null(ColumnType::Text) => query.bind(None::<String>),
            BindValue::Null(ColumnType::Timestamp) => query.bind(None::<DateTime<Utc>>),
        };
    }
    query
}

entity_access!(SqliteAccess, SqlitePool, Dialect::Sqlite);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{
        Character, CharacterDraft, CharacterPatch, Entity, EntityAccess, PageRequest, SearchFilter,
        Trait, TraitDraft, TraitPatch,
    };

    async fn access_to<E: Entity>() -> SqliteAccess<E> {
        let storage = crate::store::Storage::connect(&crate::config::StorageTarget::Embedded {
            path: crate::config::MEMORY_DATABASE.into(),
        })
        .await
        .unwrap();
        storage.ensure_tables(&[E::DEF]).await.unwrap();
        match storage {
            crate::store::Storage::Embedded(pool) => SqliteAccess::new(pool),
            _ => unreachable!(),
        }
    }

    async fn access() -> SqliteAccess<Trait> {
        access_to::<Trait>().await
    }

    fn draft(name: &str) -> TraitDraft {
        TraitDraft {
            trait_nm: Some(name.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn insert_returns_generated_key_and_audit_defaults() {
        let a = access().await;
        let row = a.insert(&draft("Brave")).await.unwrap();
        assert!(row.trait_no > 0);
        assert_eq!(row.trait_nm, "Brave");
        assert_eq!(row.audit.use_yn.as_deref(), Some("Y"));
        assert_eq!(row.audit.del_yn.as_deref(), Some("N"));
        assert!(row.audit.crt_dt.is_some());
        assert_eq!(a.select_by_key(row.trait_no, None).await.unwrap(), Some(row));
    }

    #[tokio::test]
    async fn list_is_newest_first_with_total() {
        let a = access().await;
        for n in ["a", "b", "c"] {
            a.insert(&draft(n)).await.unwrap();
        }
        let got = a
            .select_list(&SearchFilter::default(), PageRequest { page: 1, page_size: 2 })
            .await
            .unwrap();
        assert_eq!(got.total_cnt, 3);
        let names: Vec<_> = got.rows.iter().map(|r| r.trait_nm.as_str()).collect();
        assert_eq!(names, ["c", "b"]);
    }

    #[tokio::test]
    async fn keyword_search_ignores_case() {
        let a = access().await;
        a.insert(&draft("Fire Walker")).await.unwrap();
        a.insert(&draft("Ice Queen")).await.unwrap();
        let filter = SearchFilter {
            search_keyword: Some("FIRE".into()),
            ..Default::default()
        };
        let got = a.select_list(&filter, PageRequest { page: 1, page_size: 10 }).await.unwrap();
        assert_eq!(got.total_cnt, 1);
        assert_eq!(got.rows[0].trait_nm, "Fire Walker");
    }

    #[tokio::test]
    async fn patch_leaves_unset_fields_alone() {
        let a = access().await;
        let mut d = draft("Calm");
        d.trait_expln = Some("never panics".into());
        let row = a.insert(&d).await.unwrap();
        let patch = TraitPatch {
            aply_trgt: Some("CHAR".into()),
            ..Default::default()
        };
        let updated = a.update(row.trait_no, None, &patch).await.unwrap().unwrap();
        assert_eq!(updated.trait_expln.as_deref(), Some("never panics"));
        assert_eq!(updated.aply_trgt.as_deref(), Some("CHAR"));
        assert!(a.update(row.trait_no + 100, None, &patch).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deleted_rows_disappear() {
        let a = access().await;
        let row = a.insert(&draft("Gone")).await.unwrap();
        assert!(a.delete(row.trait_no, None).await.unwrap());
        assert!(!a.delete(row.trait_no, None).await.unwrap());
        assert!(a.select_by_key(row.trait_no, None).await.unwrap().is_none());
        assert!(a.update(row.trait_no, None, &TraitPatch::default()).await.unwrap().is_none());
        let list = a
            .select_list(&SearchFilter::default(), PageRequest { page: 1, page_size: 10 })
            .await
            .unwrap();
        assert_eq!(list.total_cnt, 0);
    }

    #[tokio::test]
    async fn keyword_search_folds_non_ascii_letters() {
        let a = access().await;
        a.insert(&draft("Élan Vital")).await.unwrap();
        a.insert(&draft("Ölmez")).await.unwrap();
        for keyword in ["élan", "ÉLAN", "Élan vital"] {
            let filter = SearchFilter {
                search_keyword: Some(keyword.into()),
                ..Default::default()
            };
            let got = a.select_list(&filter, PageRequest { page: 1, page_size: 10 }).await.unwrap();
            assert_eq!(got.total_cnt, 1, "keyword {keyword}");
            assert_eq!(got.rows[0].trait_nm, "Élan Vital");
        }
    }

    #[tokio::test]
    async fn renamed_rows_are_found_by_their_new_name() {
        let a = access().await;
        let row = a.insert(&draft("Old Name")).await.unwrap();
        let patch = TraitPatch {
            trait_nm: Some("Ärger".into()),
            ..Default::default()
        };
        a.update(row.trait_no, None, &patch).await.unwrap().unwrap();
        let search = |k: &str| SearchFilter {
            search_keyword: Some(k.into()),
            ..Default::default()
        };
        let page = PageRequest { page: 1, page_size: 10 };
        assert_eq!(a.select_list(&search("ärg"), page).await.unwrap().total_cnt, 1);
        assert_eq!(a.select_list(&search("old"), page).await.unwrap().total_cnt, 0);
    }

    #[tokio::test]
    async fn scoped_rows_are_only_reachable_from_their_project() {
        let a = access_to::<Character>().await;
        let row = a
            .insert(&CharacterDraft {
                prj_no: Some(1),
                char_nm: Some("Ada".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(a.select_by_key(row.char_no, Some(2)).await.unwrap().is_none());
        assert!(a.update(row.char_no, Some(2), &CharacterPatch::default()).await.unwrap().is_none());
        assert!(!a.delete(row.char_no, Some(2)).await.unwrap());
        assert_eq!(a.select_by_key(row.char_no, Some(1)).await.unwrap(), Some(row.clone()));
        assert!(a.delete(row.char_no, Some(1)).await.unwrap());
    }
}
