use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Result<Self, AppError> {
        if page <= 0 {
            return Err(AppError::BadRequest(
                "page query param is wrong. Expected an integer greater than 0".to_string(),
            ));
        }
        if limit <= 0 {
            return Err(AppError::BadRequest(
                "limit query param is wrong. Expected an integer greater than 0".to_string(),
            ));
        }
        Ok(Self { page, limit })
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.limit * (self.page - 1)
    }

    pub fn max_page(&self, total: i64) -> i64 {
        total / self.limit + 1
    }

    pub fn ensure_contains(&self, total: i64) -> Result<(), AppError> {
        if self.page > self.max_page(total) {
            return Err(AppError::NoSuchPage { page: self.page });
        }
        Ok(())
    }
}
