// Rust guideline compliant 2026-10-12

//! Storage module for JSONL file operations.
//!
//! Bookings and reviews are stored one JSON object per line. Reads skip
//! malformed lines; writes replace the whole file through
//! a temp file and an atomic rename. Every read-modify-write runs under an
//! exclusive lock on a sibling `.lock` file, which is what makes status
//! transitions and the one-review-per-booking rule safe across processes.

use crate::fsm::apply_transition;
use crate::repository::{filter_and_sort, BookingFilter, BookingRepository, ReviewRepository};
use crate::{Booking, BookingStatus, Error, Result, Review};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// A value stored as one JSONL line.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Validates the record before it is written or after it is read.
    ///
    /// # Errors
    ///
    /// Returns a validation error describing the first problem found.
    fn validate(&self) -> Result<()>;
}

impl Record for Booking {
    fn validate(&self) -> Result<()> {
        Booking::validate(self)
    }
}

impl Record for Review {
    fn validate(&self) -> Result<()> {
        Review::validate(self)
    }
}

/// A JSONL file of records of one type.
#[derive(Debug, Clone)]
pub struct JsonlFile<T> {
    path: PathBuf,
    _record: PhantomData<T>,
}

impl<T: Record> JsonlFile<T> {
    /// Creates a handle for the JSONL file at `path`.
    ///
    /// The file itself is created lazily on first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self {
            path,
            _record: PhantomData,
        })
    }

    /// Returns the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all records, reading the file line by line.
    ///
    /// A missing file is treated as empty. Blank lines are ignored and
    /// malformed JSON lines are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or read
    /// - A well-formed record fails validation
    pub fn load_all(&self) -> Result<Vec<T>> {
        use std::fs::File;
        use std::io::{BufRead, BufReader};

        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut records = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<T>(&line) {
                Ok(record) => {
                    record.validate()?;
                    records.push(record);
                }
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = index + 1,
                        error = %e,
                        "skipping malformed JSON line"
                    );
                }
            }
        }

        Ok(records)
    }

    /// Replaces the file contents with `records`.
    ///
    /// Writes go to `<file>.tmp` first and are renamed into place.
    ///
    /// # Errors
    ///
    /// Returns an error if any record fails validation or the write fails.
    pub fn save_all(&self, records: &[T]) -> Result<()> {
        use std::fs::File;
        use std::io::Write;

        for record in records {
            record.validate()?;
        }

        let temp_path = self.path.with_extension("jsonl.tmp");
        {
            let mut file = File::create(&temp_path)?;
            for record in records {
                let json = serde_json::to_string(record)?;
                file.write_all(json.as_bytes())?;
                file.write_all(b"\n")?;
            }
            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "saved records");

        Ok(())
    }

    /// Executes a closure with an exclusive lock on the file.
    ///
    /// Blocks until the lock is available, so concurrent writers are
    /// serialized rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock file cannot be opened or locked, or if
    /// the closure fails.
    pub fn with_lock<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce() -> Result<R>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        lock_file.lock_exclusive()?;
        let result = f();
        let _ = lock_file.unlock();

        result
    }

    /// Loads, mutates and saves the records under the file lock.
    fn modify<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R>,
    {
        self.with_lock(|| {
            let mut records = self.load_all()?;
            let result = f(&mut records)?;
            self.save_all(&records)?;
            Ok(result)
        })
    }
}

/// JSONL-backed [`BookingRepository`].
#[derive(Debug, Clone)]
pub struct BookingStore {
    file: JsonlFile<Booking>,
}

impl BookingStore {
    /// Opens the booking store at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is invalid.
    pub fn new(path: PathBuf) -> Result<Self> {
        Ok(Self {
            file: JsonlFile::new(path)?,
        })
    }

    /// Returns the underlying file path.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Loads every stored booking in file order.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load_all(&self) -> Result<Vec<Booking>> {
        self.file.load_all()
    }

    fn update_one<F>(&self, id: &str, f: F) -> Result<Booking>
    where
        F: FnOnce(&mut Booking) -> Result<()>,
    {
        self.file.modify(|bookings| {
            let booking = bookings
                .iter_mut()
                .find(|b| b.id == id)
                .ok_or_else(|| Error::NotFound(id.to_string()))?;
            let mut updated = booking.clone();
            f(&mut updated)?;
            updated.validate()?;
            *booking = updated.clone();
            Ok(updated)
        })
    }
}

impl BookingRepository for BookingStore {
    fn create(&self, booking: Booking) -> Result<Booking> {
        booking.validate()?;
        self.file.modify(|bookings| {
            if bookings.iter().any(|b| b.id == booking.id) {
                return Err(Error::Validation(format!(
                    "Booking {} already exists",
                    booking.id
                )));
            }
            bookings.push(booking.clone());
            Ok(booking)
        })
    }

    fn get(&self, id: &str) -> Result<Booking> {
        self.file
            .load_all()?
            .into_iter()
            .find(|b| b.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    fn list_by_user(&self, user_id: &str, filter: &BookingFilter) -> Result<Vec<Booking>> {
        let mut bookings = self.file.load_all()?;
        bookings.retain(|b| b.user_id == user_id);
        Ok(filter_and_sort(bookings, filter))
    }

    fn list_by_provider(&self, provider_id: &str, filter: &BookingFilter) -> Result<Vec<Booking>> {
        let mut bookings = self.file.load_all()?;
        bookings.retain(|b| b.provider_id == provider_id);
        Ok(filter_and_sort(bookings, filter))
    }

    fn update_status(
        &self,
        id: &str,
        status: BookingStatus,
        reason: Option<String>,
        now: NaiveDateTime,
    ) -> Result<Booking> {
        self.update_one(id, |booking| apply_transition(booking, status, reason, now))
    }

    fn update_date_time(
        &self,
        id: &str,
        date: NaiveDate,
        time: NaiveTime,
        now: NaiveDateTime,
    ) -> Result<Booking> {
        self.update_one(id, |booking| {
            if booking.status != BookingStatus::Pending {
                return Err(Error::Validation(format!(
                    "Only pending bookings can be rescheduled; {} is {}",
                    booking.id, booking.status
                )));
            }
            booking.date = date;
            booking.time = time;
            booking.updated_at = now;
            Ok(())
        })
    }
}

/// JSONL-backed [`ReviewRepository`].
#[derive(Debug, Clone)]
pub struct ReviewStore {
    file: JsonlFile<Review>,
}

impl ReviewStore {
    /// Opens the review store at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is invalid.
    pub fn new(path: PathBuf) -> Result<Self> {
        Ok(Self {
            file: JsonlFile::new(path)?,
        })
    }

    /// Returns the underlying file path.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Loads every stored review in file order.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load_all(&self) -> Result<Vec<Review>> {
        self.file.load_all()
    }
}

impl ReviewRepository for ReviewStore {
    fn create(&self, review: Review) -> Result<Review> {
        review.validate()?;
        self.file.modify(|reviews| {
            if reviews.iter().any(|r| r.booking_id == review.booking_id) {
                return Err(Error::DuplicateReview(review.booking_id.clone()));
            }
            if reviews.iter().any(|r| r.id == review.id) {
                return Err(Error::Validation(format!(
                    "Review {} already exists",
                    review.id
                )));
            }
            reviews.push(review.clone());
            Ok(review)
        })
    }

    fn exists_for_booking(&self, booking_id: &str) -> Result<bool> {
        Ok(self.find_for_booking(booking_id)?.is_some())
    }

    fn find_for_booking(&self, booking_id: &str) -> Result<Option<Review>> {
        Ok(self
            .file
            .load_all()?
            .into_iter()
            .find(|r| r.booking_id == booking_id))
    }

    fn list_by_provider(&self, provider_id: &str) -> Result<Vec<Review>> {
        let mut reviews = self.file.load_all()?;
        reviews.retain(|r| r.provider_id == provider_id);
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(reviews)
    }

    fn update(&self, review: Review) -> Result<Review> {
        review.validate()?;
        self.file.modify(|reviews| {
            let stored = reviews
                .iter_mut()
                .find(|r| r.id == review.id)
                .ok_or_else(|| Error::NotFound(review.id.clone()))?;
            let changed = if stored.booking_id != review.booking_id {
                Some("booking")
            } else if stored.user_id != review.user_id {
                Some("author")
            } else if stored.provider_id != review.provider_id {
                Some("provider")
            } else if stored.created_at != review.created_at {
                Some("creation time")
            } else {
                None
            };
            if let Some(field) = changed {
                return Err(Error::Validation(format!(
                    "Review {} cannot change its {}",
                    review.id, field
                )));
            }
            *stored = review.clone();
            Ok(review)
        })
    }
}
