//! List filters: paging parameters and the predicates a filter expands to.

use crate::error::AppError;
use crate::sql::BindValue;
use serde::Deserialize;

/// Largest page a client may request.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Paging as requested; `None` means "use the default".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageParams {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.page == Some(0) {
            return Err(AppError::Validation("page must be at least 1".into()));
        }
        match self.page_size {
            Some(0) => Err(AppError::Validation("pageSize must be at least 1".into())),
            Some(n) if n > MAX_PAGE_SIZE => Err(AppError::Validation(format!(
                "pageSize must be at most {}",
                MAX_PAGE_SIZE
            ))),
            _ => Ok(()),
        }
    }
}

/// One WHERE condition, combined with AND.
#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    Eq(&'static str, BindValue),
    /// Case-insensitive substring match on any of the columns.
    Contains(Vec<&'static str>, String),
}

/// Filter shared by the catalogue: paging, optional project scope, keyword search.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilter {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub prj_no: Option<i64>,
    pub search_keyword: Option<String>,
    pub search_type: Option<String>,
}

impl SearchFilter {
    pub fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// Scope equality plus keyword search. An unknown or absent `searchType`
    /// searches every listed column.
    pub fn predicates(
        &self,
        scope: Option<&'static str>,
        search: &[(&'static str, &'static str)],
    ) -> Vec<Predicate> {
        let mut out = Vec::new();
        if let (Some(column), Some(prj_no)) = (scope, self.prj_no) {
            out.push(Predicate::Eq(column, BindValue::Int(prj_no)));
        }
        let keyword = self
            .search_keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty());
        if let Some(keyword) = keyword {
            let chosen = self
                .search_type
                .as_deref()
                .and_then(|t| search.iter().find(|(token, _)| *token == t))
                .map(|(_, column)| vec![*column]);
            let columns = chosen.unwrap_or_else(|| search.iter().map(|(_, c)| *c).collect());
            if !columns.is_empty() {
                out.push(Predicate::Contains(columns, keyword.to_string()));
            }
        }
        out
    }

    /// Scoped entities cannot be listed across projects.
    pub fn require_scope(&self) -> Result<(), AppError> {
        match self.prj_no {
            Some(_) => Ok(()),
            None => Err(AppError::BadRequest("prjNo is required and must be a number".into())),
        }
    }
}

/// Query string of a key route (`GET`, `PATCH`, `DELETE /{key}`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyScope {
    pub prj_no: Option<i64>,
}

impl KeyScope {
    /// The project a scoped row must belong to. Unscoped entities ignore `prjNo`.
    pub fn resolve(&self, scope: Option<&'static str>) -> Result<Option<i64>, AppError> {
        match (scope, self.prj_no) {
            (None, _) => Ok(None),
            (Some(_), Some(prj_no)) => Ok(Some(prj_no)),
            (Some(_), None) => Err(AppError::BadRequest("prjNo is required and must be a number".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH: &[(&str, &str)] = &[("traitNm", "trait_nm"), ("traitExpln", "trait_expln")];

    #[test]
    fn zero_page_is_invalid() {
        let p = PageParams { page: Some(0), page_size: None };
        assert!(matches!(p.validate(), Err(AppError::Validation(_))));
        let p = PageParams { page: Some(1), page_size: Some(0) };
        assert!(matches!(p.validate(), Err(AppError::Validation(_))));
        let p = PageParams { page: None, page_size: Some(MAX_PAGE_SIZE + 1) };
        assert!(matches!(p.validate(), Err(AppError::Validation(_))));
        assert!(PageParams::default().validate().is_ok());
    }

    #[test]
    fn keyword_with_known_type_targets_one_column() {
        let f = SearchFilter {
            search_keyword: Some("fire".into()),
            search_type: Some("traitExpln".into()),
            ..Default::default()
        };
        assert_eq!(
            f.predicates(None, SEARCH),
            vec![Predicate::Contains(vec!["trait_expln"], "fire".into())]
        );
    }

    #[test]
    fn keyword_without_type_targets_all_columns() {
        let f = SearchFilter {
            search_keyword: Some(" fire ".into()),
            ..Default::default()
        };
        assert_eq!(
            f.predicates(None, SEARCH),
            vec![Predicate::Contains(vec!["trait_nm", "trait_expln"], "fire".into())]
        );
    }

    #[test]
    fn blank_keyword_adds_nothing() {
        let f = SearchFilter {
            search_keyword: Some("   ".into()),
            ..Default::default()
        };
        assert!(f.predicates(None, SEARCH).is_empty());
    }

    #[test]
    fn scope_becomes_equality() {
        let f = SearchFilter {
            prj_no: Some(7),
            ..Default::default()
        };
        assert_eq!(
            f.predicates(Some("prj_no"), SEARCH),
            vec![Predicate::Eq("prj_no", BindValue::Int(7))]
        );
        assert!(f.predicates(None, SEARCH).is_empty());
        assert!(f.require_scope().is_ok());
        assert!(SearchFilter::default().require_scope().is_err());
    }

    #[test]
    fn key_scope_is_required_only_for_scoped_entities() {
        let given = KeyScope { prj_no: Some(3) };
        assert_eq!(given.resolve(Some("prj_no")).unwrap(), Some(3));
        assert_eq!(given.resolve(None).unwrap(), None);
        assert_eq!(KeyScope::default().resolve(None).unwrap(), None);
        assert!(matches!(
            KeyScope::default().resolve(Some("prj_no")),
            Err(AppError::BadRequest(_))
        ));
    }
}
