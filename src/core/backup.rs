use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::confirm::ask_confirmation;
use crate::ui::messages::{info, success};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, optionally as a zip archive.
    /// Returns the path written, or `None` when the user declined to
    /// overwrite an existing file.
    pub fn backup(
        pool: &DbPool,
        db_path: &str,
        dest_file: &Path,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(db_path);

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest_file.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_target = if compress {
            dest_file.with_extension("zip")
        } else {
            dest_file.to_path_buf()
        };

        // 3️⃣ Existing destination → ask confirmation
        if final_target.exists()
            && !force
            && !ask_confirmation(&format!(
                "The file '{}' already exists. Overwrite it?",
                final_target.display()
            ))
        {
            info("Backup cancelled by user.");
            return Ok(None);
        }

        // 4️⃣ Copy or compress
        if compress {
            compress_backup(src, &final_target)?;
            success(format!("Compressed backup created: {}", final_target.display()));
        } else {
            fs::copy(src, &final_target)?;
            success(format!("Backup created: {}", final_target.display()));
        }

        // 5️⃣ Log in DB
        ttlog_quiet(
            &pool.conn,
            "backup",
            &final_target.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_target))
    }
}

/// Write `src` into a single-entry .zip at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "weeklog.sqlite".to_string());

    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    let mut f = fs::File::open(src)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(())
}
