//! Text rendering of the view model for the terminal front end.

use depot_core::{AppViewModel, Notice, PickupStep};

pub fn render(view: &AppViewModel) {
    println!();
    println!("== {} ({}) ==", view.map.label(), view.map.asset());

    if let Some(notice) = &view.notice {
        println!("! {}", notice_line(notice));
    }
    if view.recognition_busy {
        println!("… 识别中，请稍候");
    }

    if let Some(cards) = &view.cards {
        println!("-- 识别结果（确认前可编辑） --");
        for (index, card) in cards.iter().enumerate() {
            println!("  [{index}] 取件码: {:<12} 分区: {}", card.code, card.area);
        }
    }

    if let Some(pickup) = &view.pickup {
        match pickup.step {
            PickupStep::CameraActive => {
                let status = if let Some(error) = &pickup.camera_error {
                    format!("相机不可用: {error}")
                } else if pickup.camera_ready {
                    "相机就绪".to_string()
                } else {
                    "相机启动中".to_string()
                };
                println!("-- 拍照取件 {} | {} | {status} --", pickup.id, pickup.location);
            }
            PickupStep::PhotoCaptured => {
                println!(
                    "-- 确认取件照片 {} | {} | {} --",
                    pickup.id,
                    pickup.location,
                    pickup.photo.as_deref().unwrap_or("")
                );
            }
        }
    }

    println!("-- 待取快递 ({}) --", view.pending.len());
    for row in &view.pending {
        println!(
            "  {:<12} {}{}",
            row.id,
            row.location,
            row_suffix(row.offset_px, row.delete_revealed)
        );
    }

    println!("-- 取件记录 ({}) --", view.history.len());
    for row in &view.history {
        println!(
            "  {:<12} {} {} {}{}",
            row.id,
            row.location,
            row.pickup_time,
            row.photo,
            row_suffix(row.offset_px, row.delete_revealed)
        );
    }

    if let Some(stats) = view.last_merge {
        println!("(上次合并: 新增 {} / 跳过 {})", stats.added, stats.skipped);
    }
}

fn row_suffix(offset_px: f32, delete_revealed: bool) -> String {
    if delete_revealed {
        "  [删除]".to_string()
    } else if offset_px < 0.0 {
        format!("  ({offset_px:.0}px)")
    } else {
        String::new()
    }
}

fn notice_line(notice: &Notice) -> String {
    match notice {
        Notice::NotRecognized => "未识别到快递码，请检查输入或图片清晰度".to_string(),
        Notice::RecognitionFailed(message) => format!("识别请求失败: {message}"),
        Notice::CaptureFailed(message) => format!("拍照失败，请重试: {message}"),
        Notice::PickupComplete { id } => format!("取件成功: {id}"),
    }
}
