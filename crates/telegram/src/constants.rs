//! Constants used throughout the telegram bot

/// Fixed reply texts
pub mod replies {
    pub const WELCOME: &str = "👋 Welcome to the Terabox Video Downloader Bot!\n\n\
        Send me a Terabox link, and I'll fetch the direct download link for you.";

    /// Sent with HTML parse mode
    pub const HELP: &str = "💡 <b>How to Use:</b>\n\
        Just send a valid Terabox link, and I will generate a direct download link for you!\n\n\
        🔹 Example: https://terabox.com/s/xyz123\n\n\
        ⚠️ If you face any issues, try again later.";

    pub const INVALID_LINK: &str = "⚠️ Please send a valid Terabox link!";
    pub const EMPTY_RESULT: &str = "⚠️ Could not fetch the download link. Please try again later!";
    pub const API_ERROR: &str = "⚠️ API Error: Unable to fetch the download link. Try again later!";
    pub const UNEXPECTED: &str = "⚠️ An unexpected error occurred. Please try again later!";
    pub const UNSUPPORTED: &str = "Unable to handle the message. Type /help to see the usage.";

    /// Label placed on the line above a resolved link
    pub const DOWNLOAD_LABEL: &str = "📥 Download Link:";
}
