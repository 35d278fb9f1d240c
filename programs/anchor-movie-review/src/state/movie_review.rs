use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::MovieReviewError;

/// Movie review record, one per (title, reviewer) pair
///
/// PDA Seeds: [title, reviewer]
#[account]
pub struct MovieAccountState {
    /// The wallet that created the review; the only key allowed to change it
    pub reviewer: Pubkey,
    
    /// Rating from 1 to 5
    pub rating: u8,
    
    /// Movie title, part of the PDA seeds and never rewritten
    pub title: String,
    
    /// Free-form review text
    pub description: String,
    
    /// PDA bump seed
    pub bump: u8,
}

impl MovieAccountState {
    /// Size without the string payloads
    /// Discriminator (8) + Pubkey (32) + u8 (1) + String prefix (4)
    /// + String prefix (4) + u8 (1)
    pub const BASE_LEN: usize = 8 + 32 + 1 + 4 + 4 + 1;
    
    /// Calculate space needed to hold the given title and description
    pub fn space(title: &str, description: &str) -> usize {
        Self::BASE_LEN + title.len() + description.len()
    }
    
    /// Validate review content before it is written
    pub fn validate_content(title: &str, description: &str, rating: u8) -> Result<()> {
        require!(
            (MIN_RATING..=MAX_RATING).contains(&rating),
            MovieReviewError::InvalidRating
        );
        
        require!(
            title.len() <= MAX_TITLE_LENGTH,
            MovieReviewError::TitleTooLong
        );
        
        require!(
            description.len() <= MAX_DESCRIPTION_LENGTH,
            MovieReviewError::DescriptionTooLong
        );
        
        Ok(())
    }
    
    /// Fail unless `caller` is the reviewer who created this record
    pub fn ensure_reviewer(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.reviewer, *caller, MovieReviewError::Unauthorized);
        Ok(())
    }
    
    /// Overwrite the mutable fields. Title and reviewer stay as created.
    pub fn apply_update(&mut self, caller: &Pubkey, description: String, rating: u8) -> Result<()> {
        self.ensure_reviewer(caller)?;
        Self::validate_content(&self.title, &description, rating)?;
        
        self.description = description;
        self.rating = rating;
        
        Ok(())
    }
}
