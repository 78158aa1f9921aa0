use diesel::prelude::*;

use crate::db::DbConnection;
use crate::domain::media::{AudioVideoMedia, ImageMedia};
use crate::domain::types::{CastMemberId, CategoryId, GenreId, MediaId, VideoId};
use crate::domain::video::{Rating, Video};
use crate::models::video::{
    ImageMedia as DbImageMedia, NewImageMedia, NewVideo, NewVideoMedia, Video as DbVideo,
    VideoCastMember, VideoCategory, VideoGenre, VideoMedia as DbVideoMedia,
};
use crate::repository::{
    DieselRepository, RepositoryError, RepositoryResult, VideoReader, VideoWriter, distinct_ids,
};

fn save_video_media(
    conn: &mut DbConnection,
    media: Option<&AudioVideoMedia>,
) -> RepositoryResult<Option<i64>> {
    use crate::schema::videos_video_media;

    let Some(media) = media else {
        return Ok(None);
    };
    let id = diesel::insert_into(videos_video_media::table)
        .values(NewVideoMedia::from(media))
        .returning(videos_video_media::id)
        .get_result::<i64>(conn)?;
    Ok(Some(id))
}

fn save_image_media(
    conn: &mut DbConnection,
    media: Option<&ImageMedia>,
) -> RepositoryResult<Option<i64>> {
    use crate::schema::videos_image_media;

    let Some(media) = media else {
        return Ok(None);
    };
    let id = diesel::insert_into(videos_image_media::table)
        .values(NewImageMedia::from(media))
        .returning(videos_image_media::id)
        .get_result::<i64>(conn)?;
    Ok(Some(id))
}

fn load_video_media(
    conn: &mut DbConnection,
    id: Option<i64>,
) -> RepositoryResult<Option<AudioVideoMedia>> {
    use crate::schema::videos_video_media;

    let Some(id) = id else {
        return Ok(None);
    };
    let media = videos_video_media::table
        .find(id)
        .first::<DbVideoMedia>(conn)
        .optional()?;
    Ok(media.map(TryInto::try_into).transpose()?)
}

fn load_image_media(
    conn: &mut DbConnection,
    id: Option<i64>,
) -> RepositoryResult<Option<ImageMedia>> {
    use crate::schema::videos_image_media;

    let Some(id) = id else {
        return Ok(None);
    };
    let media = videos_image_media::table
        .find(id)
        .first::<DbImageMedia>(conn)
        .optional()?;
    Ok(media.map(TryInto::try_into).transpose()?)
}

fn assign_media_id(slot: Option<&mut AudioVideoMedia>, id: Option<i64>) -> RepositoryResult<()> {
    if let (Some(media), Some(id)) = (slot, id) {
        media.id = Some(MediaId::new(id)?);
    }
    Ok(())
}

fn assign_image_id(slot: Option<&mut ImageMedia>, id: Option<i64>) -> RepositoryResult<()> {
    if let (Some(media), Some(id)) = (slot, id) {
        media.id = Some(MediaId::new(id)?);
    }
    Ok(())
}

impl VideoReader for DieselRepository {
    fn get_video_by_id(&self, id: VideoId) -> RepositoryResult<Option<Video>> {
        use crate::schema::{videos, videos_cast_members, videos_categories, videos_genres};

        let mut conn = self.conn()?;

        let Some(row) = videos::table
            .find(id.get())
            .first::<DbVideo>(&mut conn)
            .optional()?
        else {
            return Ok(None);
        };

        let category_ids = videos_categories::table
            .filter(videos_categories::video_id.eq(row.id))
            .select(videos_categories::category_id)
            .order(videos_categories::category_id.asc())
            .load::<i64>(&mut conn)?
            .into_iter()
            .map(CategoryId::new)
            .collect::<Result<Vec<_>, _>>()?;
        let genre_ids = videos_genres::table
            .filter(videos_genres::video_id.eq(row.id))
            .select(videos_genres::genre_id)
            .order(videos_genres::genre_id.asc())
            .load::<i64>(&mut conn)?
            .into_iter()
            .map(GenreId::new)
            .collect::<Result<Vec<_>, _>>()?;
        let cast_member_ids = videos_cast_members::table
            .filter(videos_cast_members::video_id.eq(row.id))
            .select(videos_cast_members::cast_member_id)
            .order(videos_cast_members::cast_member_id.asc())
            .load::<i64>(&mut conn)?
            .into_iter()
            .map(CastMemberId::new)
            .collect::<Result<Vec<_>, _>>()?;

        let rating: Rating = row.rating.parse()?;

        Ok(Some(Video {
            id: Some(VideoId::new(row.id)?),
            title: row.title,
            description: row.description,
            launched_at: row.year_launched,
            duration: row.duration,
            rating,
            opened: row.opened,
            published: row.published,
            created_at: row.created_at,
            updated_at: row.updated_at,
            banner: load_image_media(&mut conn, row.banner_id)?,
            thumbnail: load_image_media(&mut conn, row.thumbnail_id)?,
            thumbnail_half: load_image_media(&mut conn, row.thumbnail_half_id)?,
            video: load_video_media(&mut conn, row.video_id)?,
            trailer: load_video_media(&mut conn, row.trailer_id)?,
            category_ids,
            genre_ids,
            cast_member_ids,
        }))
    }
}

impl VideoWriter for DieselRepository {
    fn create_video(&self, video: &Video) -> RepositoryResult<Video> {
        use crate::schema::{videos, videos_cast_members, videos_categories, videos_genres};

        let mut conn = self.conn()?;
        let category_ids = distinct_ids(&video.category_ids);
        let genre_ids = distinct_ids(&video.genre_ids);
        let cast_member_ids = distinct_ids(&video.cast_member_ids);

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let video_media_id = save_video_media(conn, video.video.as_ref())?;
            let trailer_media_id = save_video_media(conn, video.trailer.as_ref())?;
            let banner_media_id = save_image_media(conn, video.banner.as_ref())?;
            let thumbnail_media_id = save_image_media(conn, video.thumbnail.as_ref())?;
            let thumbnail_half_media_id = save_image_media(conn, video.thumbnail_half.as_ref())?;

            let row = NewVideo {
                video_id: video_media_id,
                trailer_id: trailer_media_id,
                banner_id: banner_media_id,
                thumbnail_id: thumbnail_media_id,
                thumbnail_half_id: thumbnail_half_media_id,
                ..NewVideo::new(video)
            };
            let id = diesel::insert_into(videos::table)
                .values(&row)
                .returning(videos::id)
                .get_result::<i64>(conn)?;

            if !category_ids.is_empty() {
                let links: Vec<VideoCategory> = category_ids
                    .iter()
                    .map(|category_id| VideoCategory {
                        video_id: id,
                        category_id: *category_id,
                    })
                    .collect();
                diesel::insert_into(videos_categories::table)
                    .values(&links)
                    .execute(conn)?;
            }
            if !cast_member_ids.is_empty() {
                let links: Vec<VideoCastMember> = cast_member_ids
                    .iter()
                    .map(|cast_member_id| VideoCastMember {
                        video_id: id,
                        cast_member_id: *cast_member_id,
                    })
                    .collect();
                diesel::insert_into(videos_cast_members::table)
                    .values(&links)
                    .execute(conn)?;
            }
            if !genre_ids.is_empty() {
                let links: Vec<VideoGenre> = genre_ids
                    .iter()
                    .map(|genre_id| VideoGenre {
                        video_id: id,
                        genre_id: *genre_id,
                    })
                    .collect();
                diesel::insert_into(videos_genres::table)
                    .values(&links)
                    .execute(conn)?;
            }

            let mut saved = video.clone();
            saved.id = Some(VideoId::new(id)?);
            assign_media_id(saved.video.as_mut(), video_media_id)?;
            assign_media_id(saved.trailer.as_mut(), trailer_media_id)?;
            assign_image_id(saved.banner.as_mut(), banner_media_id)?;
            assign_image_id(saved.thumbnail.as_mut(), thumbnail_media_id)?;
            assign_image_id(saved.thumbnail_half.as_mut(), thumbnail_half_media_id)?;
            Ok(saved)
        })
    }

    fn delete_video(&self, id: VideoId) -> RepositoryResult<usize> {
        use crate::schema::{
            videos, videos_cast_members, videos_categories, videos_genres, videos_image_media,
            videos_video_media,
        };

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let Some(row) = videos::table
                .find(id.get())
                .first::<DbVideo>(conn)
                .optional()?
            else {
                return Ok(0);
            };

            diesel::delete(videos_categories::table.filter(videos_categories::video_id.eq(row.id)))
                .execute(conn)?;
            diesel::delete(videos_genres::table.filter(videos_genres::video_id.eq(row.id)))
                .execute(conn)?;
            diesel::delete(
                videos_cast_members::table.filter(videos_cast_members::video_id.eq(row.id)),
            )
            .execute(conn)?;

            let affected = diesel::delete(videos::table.find(row.id)).execute(conn)?;

            let av_ids: Vec<i64> = [row.video_id, row.trailer_id].into_iter().flatten().collect();
            let image_ids: Vec<i64> = [row.banner_id, row.thumbnail_id, row.thumbnail_half_id]
                .into_iter()
                .flatten()
                .collect();
            diesel::delete(videos_video_media::table.filter(videos_video_media::id.eq_any(av_ids)))
                .execute(conn)?;
            diesel::delete(videos_image_media::table.filter(videos_image_media::id.eq_any(image_ids)))
                .execute(conn)?;

            Ok(affected)
        })
    }
}
